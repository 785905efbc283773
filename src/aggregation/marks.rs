//! 成绩聚合
//!
//! 每场测验的满分按三个固定科目平分（每科 total_marks / 3），
//! 单科百分比 = 得分 / 每科满分 × 100。
//!
//! 科目均值有两种口径，调用方各取所需：
//! - recorded-only：只对实际录入的成绩求均值（需进步名单、报表）；
//! - zero-filled：按测验分组，缺考科目按 0 分计入（成绩综合视图）。

use std::collections::HashMap;

use crate::models::tests::entities::Subject;
use crate::models::tests::requests::MarkEntry;

/// 单科均值低于这个百分比即进入需进步名单
pub const SUBJECT_FLOOR_THRESHOLD: f64 = 40.0;

/// 总体均值（mean-of-means）低于这个百分比即进入进步报表
pub const OVERALL_MEAN_THRESHOLD: f64 = 50.0;

/// 进步图表用的固定每科满分
/// 沿用历史行为：不取各测验的真实满分，固定按 30 分算。已知的近似口径
pub const CHART_ASSUMED_SUBJECT_MAX: f64 = 30.0;

/// 进步图表的阈值
pub const CHART_IMPROVEMENT_THRESHOLD: f64 = 50.0;

/// 一条已关联测验满分的成绩
#[derive(Debug, Clone, PartialEq)]
pub struct GradedMark {
    pub test_id: i64,
    pub subject: Subject,
    pub marks_obtained: f64,
    pub test_total_marks: f64,
}

impl GradedMark {
    pub fn from_row(mark: &crate::models::tests::entities::TestMark, test: &crate::models::tests::entities::Test) -> Self {
        Self {
            test_id: test.id,
            subject: mark.subject,
            marks_obtained: mark.marks_obtained,
            test_total_marks: test.total_marks,
        }
    }
}

/// 把 (成绩, 测验) 行按学生分桶，桶内保持行的原始顺序
pub fn group_marks_by_student(
    rows: &[(
        crate::models::tests::entities::TestMark,
        crate::models::tests::entities::Test,
    )],
) -> HashMap<i64, Vec<GradedMark>> {
    let mut grouped: HashMap<i64, Vec<GradedMark>> = HashMap::new();
    for (mark, test) in rows {
        grouped
            .entry(mark.student_id)
            .or_default()
            .push(GradedMark::from_row(mark, test));
    }
    grouped
}

/// 三科均值
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubjectAverages {
    pub coding: f64,
    pub aptitude: f64,
    pub technical: f64,
}

impl SubjectAverages {
    pub fn get(&self, subject: Subject) -> f64 {
        match subject {
            Subject::Coding => self.coding,
            Subject::Aptitude => self.aptitude,
            Subject::Technical => self.technical,
        }
    }
}

/// 每科满分 = 测验满分 / 3
pub fn per_subject_max(total_marks: f64) -> f64 {
    total_marks / Subject::COUNT
}

/// 单科单次测验的百分比，满分非正时为 0
pub fn subject_percentage(marks_obtained: f64, per_subject_max: f64) -> f64 {
    if per_subject_max <= 0.0 {
        return 0.0;
    }
    marks_obtained / per_subject_max * 100.0
}

fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// 科目均值（recorded-only 口径）：只统计实际录入的成绩
pub fn subject_averages_recorded_only(marks: &[GradedMark]) -> SubjectAverages {
    let mut scores: HashMap<Subject, Vec<f64>> = HashMap::new();

    for mark in marks {
        let percent = subject_percentage(mark.marks_obtained, per_subject_max(mark.test_total_marks));
        scores.entry(mark.subject).or_default().push(percent);
    }

    SubjectAverages {
        coding: average(scores.get(&Subject::Coding).map_or(&[][..], |v| v)),
        aptitude: average(scores.get(&Subject::Aptitude).map_or(&[][..], |v| v)),
        technical: average(scores.get(&Subject::Technical).map_or(&[][..], |v| v)),
    }
}

/// 科目均值（zero-filled 口径）：按测验分组，每场测验三科都计入，缺考按 0 分
pub fn subject_averages_zero_filled(marks: &[GradedMark]) -> SubjectAverages {
    // 按测验分组，保持首次出现顺序
    let mut index: HashMap<i64, usize> = HashMap::new();
    let mut grouped: Vec<(f64, HashMap<Subject, f64>)> = Vec::new();

    for mark in marks {
        let slot = *index.entry(mark.test_id).or_insert_with(|| {
            grouped.push((mark.test_total_marks, HashMap::new()));
            grouped.len() - 1
        });
        grouped[slot].1.insert(mark.subject, mark.marks_obtained);
    }

    let mut scores: HashMap<Subject, Vec<f64>> = HashMap::new();
    for (total_marks, subjects) in &grouped {
        let max = per_subject_max(*total_marks);
        for subject in Subject::all() {
            let obtained = subjects.get(subject).copied().unwrap_or(0.0);
            scores
                .entry(*subject)
                .or_default()
                .push(subject_percentage(obtained, max));
        }
    }

    SubjectAverages {
        coding: average(scores.get(&Subject::Coding).map_or(&[][..], |v| v)),
        aptitude: average(scores.get(&Subject::Aptitude).map_or(&[][..], |v| v)),
        technical: average(scores.get(&Subject::Technical).map_or(&[][..], |v| v)),
    }
}

/// 总体百分比（加权口径）：Σ得分 / Σ每科满分 × 100
/// 与 mean-of-means 口径在各科测验数不同时会产生不同的数值，两者并存
pub fn overall_percentage_weighted(marks: &[GradedMark]) -> f64 {
    let total_obtained: f64 = marks.iter().map(|m| m.marks_obtained).sum();
    let total_possible: f64 = marks
        .iter()
        .map(|m| per_subject_max(m.test_total_marks))
        .sum();

    if total_possible <= 0.0 {
        return 0.0;
    }
    total_obtained / total_possible * 100.0
}

/// 总体百分比（mean-of-means 口径）：三科均值的算术平均
pub fn overall_percentage_mean_of_means(averages: &SubjectAverages) -> f64 {
    (averages.coding + averages.aptitude + averages.technical) / Subject::COUNT
}

/// 需进步判定（单科下限口径）：任一科目均值严格低于 40%
pub fn needs_improvement_by_subject_floor(averages: &SubjectAverages) -> bool {
    averages.coding < SUBJECT_FLOOR_THRESHOLD
        || averages.aptitude < SUBJECT_FLOOR_THRESHOLD
        || averages.technical < SUBJECT_FLOOR_THRESHOLD
}

/// 需进步判定（总体均值口径）：mean-of-means 严格低于 50%
pub fn needs_improvement_by_overall_mean(averages: &SubjectAverages) -> bool {
    overall_percentage_mean_of_means(averages) < OVERALL_MEAN_THRESHOLD
}

/// 进步图表的百分比：Σ得分 / (成绩条数 × 30) × 100
/// 固定 30 分的近似口径，与上面按真实满分的公式并存
pub fn chart_percentage(marks: &[GradedMark]) -> f64 {
    if marks.is_empty() {
        return 0.0;
    }
    let total_obtained: f64 = marks.iter().map(|m| m.marks_obtained).sum();
    let total_possible = marks.len() as f64 * CHART_ASSUMED_SUBJECT_MAX;
    total_obtained / total_possible * 100.0
}

/// 批量成绩校验失败的原因
#[derive(Debug, Clone, PartialEq)]
pub enum MarkBatchViolation {
    /// 批次总分超过测验满分
    TotalExceeded { sum: f64, total_marks: f64 },
    /// 单条成绩超过每科满分
    EntryExceedsSubjectMax {
        student_id: i64,
        marks_obtained: f64,
        per_subject_max: f64,
    },
}

impl std::fmt::Display for MarkBatchViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarkBatchViolation::TotalExceeded { sum, total_marks } => {
                write!(f, "批次总分 {sum} 超过测验满分 {total_marks}")
            }
            MarkBatchViolation::EntryExceedsSubjectMax {
                student_id,
                marks_obtained,
                per_subject_max,
            } => write!(
                f,
                "学生 {student_id} 的得分 {marks_obtained} 超过每科满分 {per_subject_max}"
            ),
        }
    }
}

/// 校验一批同场测验的成绩：
/// 1. 批次总分不得超过测验满分；
/// 2. 任何一条不得超过每科满分（total_marks / 3）。
/// 任何一条违规都拒绝整个批次，调用方不得部分写入
pub fn validate_mark_batch(
    total_marks: f64,
    entries: &[MarkEntry],
) -> Result<(), MarkBatchViolation> {
    let sum: f64 = entries.iter().map(|e| e.marks_obtained).sum();
    if sum > total_marks {
        return Err(MarkBatchViolation::TotalExceeded { sum, total_marks });
    }

    let subject_max = per_subject_max(total_marks);
    for entry in entries {
        if entry.marks_obtained > subject_max {
            return Err(MarkBatchViolation::EntryExceedsSubjectMax {
                student_id: entry.student_id,
                marks_obtained: entry.marks_obtained,
                per_subject_max: subject_max,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::round2;

    fn mark(test_id: i64, subject: Subject, obtained: f64, total: f64) -> GradedMark {
        GradedMark {
            test_id,
            subject,
            marks_obtained: obtained,
            test_total_marks: total,
        }
    }

    fn entry(student_id: i64, subject: Subject, obtained: f64) -> MarkEntry {
        MarkEntry {
            student_id,
            test_id: 1,
            subject,
            marks_obtained: obtained,
        }
    }

    #[test]
    fn test_per_subject_max() {
        assert_eq!(per_subject_max(90.0), 30.0);
        assert_eq!(per_subject_max(60.0), 20.0);
    }

    #[test]
    fn test_subject_percentage_zero_max() {
        assert_eq!(subject_percentage(10.0, 0.0), 0.0);
    }

    // 满分 90 的测验：Coding 25、Aptitude 28、Technical 20
    // 单科 83.33 / 93.33 / 66.67，加权总体 (25+28+20)/(30×3) = 81.11
    #[test]
    fn test_ninety_total_scenario() {
        let marks = vec![
            mark(1, Subject::Coding, 25.0, 90.0),
            mark(1, Subject::Aptitude, 28.0, 90.0),
            mark(1, Subject::Technical, 20.0, 90.0),
        ];

        let averages = subject_averages_recorded_only(&marks);
        assert_eq!(round2(averages.coding), 83.33);
        assert_eq!(round2(averages.aptitude), 93.33);
        assert_eq!(round2(averages.technical), 66.67);

        assert_eq!(round2(overall_percentage_weighted(&marks)), 81.11);
    }

    #[test]
    fn test_zero_marks_student_yields_zero_not_nan() {
        let averages = subject_averages_recorded_only(&[]);
        assert_eq!(averages.coding, 0.0);
        assert_eq!(averages.aptitude, 0.0);
        assert_eq!(averages.technical, 0.0);
        assert_eq!(overall_percentage_weighted(&[]), 0.0);
        assert_eq!(overall_percentage_mean_of_means(&averages), 0.0);

        let zero_filled = subject_averages_zero_filled(&[]);
        assert_eq!(zero_filled.coding, 0.0);
    }

    // recorded-only 与 zero-filled 在缺考科目上分道扬镳：
    // 只考了 Coding 时，前者 Aptitude 均值为 0（无样本），
    // 后者把这场测验的 Aptitude 按 0 分计入
    #[test]
    fn test_recorded_only_vs_zero_filled() {
        let marks = vec![mark(1, Subject::Coding, 30.0, 90.0)];

        let recorded = subject_averages_recorded_only(&marks);
        assert_eq!(recorded.coding, 100.0);
        assert_eq!(recorded.aptitude, 0.0);

        let filled = subject_averages_zero_filled(&marks);
        assert_eq!(filled.coding, 100.0);
        assert_eq!(filled.aptitude, 0.0);

        // 两场测验，一场缺考 Coding：recorded-only 均值仍是 100%，
        // zero-filled 把缺考那场按 0 算成 50%
        let marks = vec![
            mark(1, Subject::Coding, 30.0, 90.0),
            mark(2, Subject::Aptitude, 15.0, 90.0),
        ];
        let recorded = subject_averages_recorded_only(&marks);
        assert_eq!(recorded.coding, 100.0);
        let filled = subject_averages_zero_filled(&marks);
        assert_eq!(filled.coding, 50.0);
    }

    // 两种总体口径在各科测验数不同时数值会分叉
    #[test]
    fn test_weighted_vs_mean_of_means_diverge() {
        let marks = vec![
            mark(1, Subject::Coding, 30.0, 90.0),
            mark(2, Subject::Coding, 30.0, 90.0),
            mark(1, Subject::Aptitude, 15.0, 90.0),
        ];

        // 加权：(30+30+15)/(30×3) = 83.33
        assert_eq!(round2(overall_percentage_weighted(&marks)), 83.33);

        // mean-of-means：(100 + 50 + 0)/3 = 50
        let averages = subject_averages_recorded_only(&marks);
        assert_eq!(round2(overall_percentage_mean_of_means(&averages)), 50.0);
    }

    // 35/38/50：单科下限口径入选（两科低于 40），总体均值 41 也低于 50，
    // 两条判定各自独立复算；39/90/90 则只有单科口径入选
    #[test]
    fn test_two_improvement_thresholds_disagree() {
        let averages = SubjectAverages {
            coding: 35.0,
            aptitude: 38.0,
            technical: 50.0,
        };

        assert!(needs_improvement_by_subject_floor(&averages));
        assert_eq!(round2(overall_percentage_mean_of_means(&averages)), 41.0);
        assert!(needs_improvement_by_overall_mean(&averages));

        // 45/45/80：单科口径不入选，总体均值 56.67 也不入选
        let averages = SubjectAverages {
            coding: 45.0,
            aptitude: 45.0,
            technical: 80.0,
        };
        assert!(!needs_improvement_by_subject_floor(&averages));
        assert!(!needs_improvement_by_overall_mean(&averages));

        // 39/90/90：总体均值 73 达标，但单科口径仍入选
        let averages = SubjectAverages {
            coding: 39.0,
            aptitude: 90.0,
            technical: 90.0,
        };
        assert!(needs_improvement_by_subject_floor(&averages));
        assert!(!needs_improvement_by_overall_mean(&averages));
    }

    // 图表口径无视真实满分，固定按每条 30 分算
    #[test]
    fn test_chart_percentage_uses_fixed_denominator() {
        let marks = vec![
            mark(1, Subject::Coding, 20.0, 60.0),
            mark(1, Subject::Aptitude, 10.0, 60.0),
        ];
        // 真实满分每科 20，但图表按 (20+10)/(2×30) = 50
        assert_eq!(chart_percentage(&marks), 50.0);
        assert_eq!(chart_percentage(&[]), 0.0);
    }

    #[test]
    fn test_validate_mark_batch_accepts_valid() {
        let entries = vec![
            entry(1, Subject::Coding, 25.0),
            entry(1, Subject::Aptitude, 28.0),
            entry(1, Subject::Technical, 20.0),
        ];
        assert_eq!(validate_mark_batch(90.0, &entries), Ok(()));
    }

    #[test]
    fn test_validate_mark_batch_rejects_total_exceeded() {
        let entries = vec![
            entry(1, Subject::Coding, 30.0),
            entry(2, Subject::Coding, 30.0),
            entry(3, Subject::Coding, 30.0),
            entry(4, Subject::Coding, 30.0),
        ];
        assert_eq!(
            validate_mark_batch(90.0, &entries),
            Err(MarkBatchViolation::TotalExceeded {
                sum: 120.0,
                total_marks: 90.0
            })
        );
    }

    #[test]
    fn test_validate_mark_batch_rejects_entry_over_subject_max() {
        let entries = vec![entry(7, Subject::Technical, 31.0)];
        assert_eq!(
            validate_mark_batch(90.0, &entries),
            Err(MarkBatchViolation::EntryExceedsSubjectMax {
                student_id: 7,
                marks_obtained: 31.0,
                per_subject_max: 30.0
            })
        );
    }

    #[test]
    fn test_validate_mark_batch_boundary_values_pass() {
        // 恰好等于每科满分、恰好等于测验满分都合法
        let entries = vec![
            entry(1, Subject::Coding, 30.0),
            entry(1, Subject::Aptitude, 30.0),
            entry(1, Subject::Technical, 30.0),
        ];
        assert_eq!(validate_mark_batch(90.0, &entries), Ok(()));
    }
}
