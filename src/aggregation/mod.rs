//! 成绩与考勤聚合核心
//!
//! 把原始考勤记录和测验成绩换算成百分比、缺勤名单和需进步名单。
//! 这里的函数全部是纯函数：同步、无状态、不访问存储，
//! 每次请求由 services 层重新取数后调用。
//!
//! 口径约定（历史行为，调用方依赖具体公式，不要合并）：
//! - 空记录集的百分比一律为 0，任何公式都不除零；
//! - 总体百分比有两种口径：按分值加权（overall_percentage_weighted）
//!   和三科均值的算术平均（overall_percentage_mean_of_means）；
//! - 需进步判定有两种阈值：单科均值低于 40% 和总体均值低于 50%。

pub mod attendance;
pub mod marks;

/// 保留两位小数
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(81.111_111), 81.11);
        assert_eq!(round2(66.666_666), 66.67);
        assert_eq!(round2(50.0), 50.0);
        assert_eq!(round2(0.0), 0.0);
    }
}
