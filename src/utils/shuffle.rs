/// 返回打乱顺序后的副本，原切片不变
pub fn shuffle<T: Clone>(vals: &[T]) -> Vec<T> {
    let mut ret = vals.to_vec();
    fastrand::shuffle(&mut ret);
    ret
}

/// 使用指定的随机源，固定 seed 时结果可复现
pub fn shuffle_with<T: Clone>(rng: &mut fastrand::Rng, vals: &[T]) -> Vec<T> {
    let mut ret = vals.to_vec();
    rng.shuffle(&mut ret);
    ret
}
