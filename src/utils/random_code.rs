use rand::Rng;

// 易读的大写字母数字集合，去掉了 0/O、1/I 这类易混字符
const CODE_CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

pub const CLASS_CODE_LEN: usize = 6;

/// 生成 6 位班级码，创建班级时生成一次，之后不可变更
pub fn generate_class_code() -> String {
    let mut rng = rand::rng();
    (0..CLASS_CODE_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CODE_CHARSET.len());
            CODE_CHARSET[idx] as char
        })
        .collect()
}
