// ==========================================
// 灾害救援决策支持核心 - 电话号码格式化
// ==========================================

/// 10 位 -> "(555) 123-4567"; 11 位且以 1 开头 -> "+1 (555) 123-4567"; 其他原样返回 (去空白)
pub fn format_phone_number(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    match digits.len() {
        10 => format!("({}) {}-{}", &digits[0..3], &digits[3..6], &digits[6..10]),
        11 if digits.starts_with('1') => format!(
            "+1 ({}) {}-{}",
            &digits[1..4],
            &digits[4..7],
            &digits[7..11]
        ),
        _ => raw.trim().to_string(),
    }
}
