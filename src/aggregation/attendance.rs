//! 考勤聚合
//!
//! 按学生、按分组对考勤记录做分组统计，并按 70% 阈值划分缺勤者。
//! 分组都保持记录的首次出现顺序，缺勤名单对外就是这个顺序。

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};

use super::round2;
use crate::models::attendance::entities::{AttendanceRecord, AttendanceStatus};

/// 出勤率低于这个百分比即为缺勤者
pub const DEFAULTER_THRESHOLD: f64 = 70.0;

/// 单个学生的考勤统计
#[derive(Debug, Clone, PartialEq)]
pub struct StudentAttendanceStat {
    pub student_id: i64,
    pub total: usize,
    pub present: usize,
}

impl StudentAttendanceStat {
    pub fn percentage(&self) -> f64 {
        attendance_percentage(self.present, self.total)
    }
}

/// 单个分组的考勤统计
#[derive(Debug, Clone, PartialEq)]
pub struct DivisionAttendanceStat {
    pub division_id: i64,
    pub total_records: usize,
    pub present_count: usize,
}

impl DivisionAttendanceStat {
    pub fn percentage(&self) -> f64 {
        attendance_percentage(self.present_count, self.total_records)
    }
}

/// 出勤百分比，保留两位小数，空记录集为 0
pub fn attendance_percentage(present: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(present as f64 / total as f64 * 100.0)
}

/// 一批记录的出勤百分比
pub fn percentage_of_records(records: &[AttendanceRecord]) -> f64 {
    let present = records
        .iter()
        .filter(|r| r.status == AttendanceStatus::Present)
        .count();
    attendance_percentage(present, records.len())
}

/// 按学生分组统计，保持学生在记录里的首次出现顺序
pub fn per_student_stats(records: &[AttendanceRecord]) -> Vec<StudentAttendanceStat> {
    let mut index: HashMap<i64, usize> = HashMap::new();
    let mut stats: Vec<StudentAttendanceStat> = Vec::new();

    for record in records {
        let slot = *index.entry(record.student_id).or_insert_with(|| {
            stats.push(StudentAttendanceStat {
                student_id: record.student_id,
                total: 0,
                present: 0,
            });
            stats.len() - 1
        });
        stats[slot].total += 1;
        if record.status == AttendanceStatus::Present {
            stats[slot].present += 1;
        }
    }

    stats
}

/// 按分组统计，保持分组在记录里的首次出现顺序
pub fn per_division_stats(records: &[AttendanceRecord]) -> Vec<DivisionAttendanceStat> {
    let mut index: HashMap<i64, usize> = HashMap::new();
    let mut stats: Vec<DivisionAttendanceStat> = Vec::new();

    for record in records {
        let slot = *index.entry(record.division_id).or_insert_with(|| {
            stats.push(DivisionAttendanceStat {
                division_id: record.division_id,
                total_records: 0,
                present_count: 0,
            });
            stats.len() - 1
        });
        stats[slot].total_records += 1;
        if record.status == AttendanceStatus::Present {
            stats[slot].present_count += 1;
        }
    }

    stats
}

pub fn is_defaulter(percentage: f64) -> bool {
    percentage < DEFAULTER_THRESHOLD
}

/// 缺勤比例：在全体学生上统计（零记录学生也是缺勤者，0% < 70%）
pub fn defaulter_ratio(student_ids: &[i64], records: &[AttendanceRecord]) -> (i64, i64) {
    let stats = per_student_stats(records);
    let by_student: HashMap<i64, &StudentAttendanceStat> =
        stats.iter().map(|s| (s.student_id, s)).collect();

    let mut defaulters = 0i64;
    for id in student_ids {
        let percentage = by_student.get(id).map(|s| s.percentage()).unwrap_or(0.0);
        if is_defaulter(percentage) {
            defaulters += 1;
        }
    }

    (defaulters, student_ids.len() as i64 - defaulters)
}

/// 解析 "YYYY-MM" 格式的月份参数
pub fn parse_month(month: &str) -> Option<(i32, u32)> {
    let (year, month_num) = month.split_once('-')?;
    let year = year.parse::<i32>().ok()?;
    let month_num = month_num.parse::<u32>().ok()?;
    if !(1..=12).contains(&month_num) {
        return None;
    }
    Some((year, month_num))
}

/// 自然月的时间窗口：[1 号 00:00:00, 最后一天 23:59:59]
pub fn month_bounds(year: i32, month: u32) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_month_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    let last = next_month_first.pred_opt()?;

    let start = first.and_hms_opt(0, 0, 0)?.and_utc();
    let end = last.and_hms_opt(23, 59, 59)?.and_utc();
    Some((start, end))
}

/// 把任意时间归一到当天零点（考勤记录的自然键按天存）
pub fn normalize_to_midnight(datetime: DateTime<Utc>) -> DateTime<Utc> {
    datetime
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .expect("midnight is always a valid time")
        .and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone};

    fn record(student_id: i64, division_id: i64, day: u32, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            id: 0,
            student_id,
            year: "First Year".to_string(),
            branch: "CSE".to_string(),
            division_id,
            date: Utc.with_ymd_and_hms(2024, 4, day, 0, 0, 0).unwrap(),
            status,
            reason: String::new(),
            recorded_by: 1,
        }
    }

    #[test]
    fn test_percentage_bounds() {
        assert_eq!(attendance_percentage(0, 0), 0.0);
        assert_eq!(attendance_percentage(0, 10), 0.0);
        assert_eq!(attendance_percentage(10, 10), 100.0);
        assert_eq!(attendance_percentage(1, 3), 33.33);
    }

    #[test]
    fn test_present_present_absent_late_is_fifty() {
        // Late 不算出勤
        let records = vec![
            record(1, 1, 1, AttendanceStatus::Present),
            record(1, 1, 2, AttendanceStatus::Present),
            record(1, 1, 3, AttendanceStatus::Absent),
            record(1, 1, 4, AttendanceStatus::Late),
        ];
        assert_eq!(percentage_of_records(&records), 50.0);
    }

    #[test]
    fn test_per_student_stats_preserve_first_seen_order() {
        let records = vec![
            record(3, 1, 1, AttendanceStatus::Present),
            record(1, 1, 1, AttendanceStatus::Absent),
            record(3, 1, 2, AttendanceStatus::Absent),
            record(2, 1, 1, AttendanceStatus::Present),
        ];
        let stats = per_student_stats(&records);
        let order: Vec<i64> = stats.iter().map(|s| s.student_id).collect();
        assert_eq!(order, vec![3, 1, 2]);
        assert_eq!(stats[0].total, 2);
        assert_eq!(stats[0].present, 1);
    }

    #[test]
    fn test_defaulter_threshold_is_strict() {
        assert!(is_defaulter(69.99));
        assert!(!is_defaulter(70.0));
        assert!(is_defaulter(0.0));
    }

    #[test]
    fn test_defaulter_ratio_counts_zero_record_students() {
        // 10 个学生：1、2、3 出勤率低于 70%（其中 3 没有任何记录），其余 7 人达标
        let mut records = Vec::new();
        for day in 1..=10 {
            // 学生 1、2 各出勤 5/10
            let status = if day <= 5 {
                AttendanceStatus::Present
            } else {
                AttendanceStatus::Absent
            };
            records.push(record(1, 1, day, status));
            records.push(record(2, 1, day, status));
            // 学生 4..=10 全勤
            for id in 4..=10 {
                records.push(record(id, 1, day, AttendanceStatus::Present));
            }
        }
        let population: Vec<i64> = (1..=10).collect();
        let (defaulters, non_defaulters) = defaulter_ratio(&population, &records);
        assert_eq!(defaulters, 3);
        assert_eq!(non_defaulters, 7);
    }

    #[test]
    fn test_per_division_lifetime_stats() {
        let records = vec![
            record(1, 7, 1, AttendanceStatus::Present),
            record(2, 7, 1, AttendanceStatus::Absent),
            record(3, 9, 1, AttendanceStatus::Present),
            record(1, 7, 2, AttendanceStatus::Present),
        ];
        let stats = per_division_stats(&records);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].division_id, 7);
        assert_eq!(stats[0].total_records, 3);
        assert_eq!(stats[0].present_count, 2);
        assert_eq!(stats[0].percentage(), 66.67);
        assert_eq!(stats[1].percentage(), 100.0);
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2024-04"), Some((2024, 4)));
        assert_eq!(parse_month("2024-12"), Some((2024, 12)));
        assert_eq!(parse_month("2024-13"), None);
        assert_eq!(parse_month("2024"), None);
        assert_eq!(parse_month("april"), None);
    }

    #[test]
    fn test_month_bounds() {
        let (start, end) = month_bounds(2024, 4).unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 4, 30, 23, 59, 59).unwrap());

        // 闰年二月与跨年十二月
        let (_, feb_end) = month_bounds(2024, 2).unwrap();
        assert_eq!(feb_end.day(), 29);
        let (_, dec_end) = month_bounds(2023, 12).unwrap();
        assert_eq!(dec_end, Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap());
    }

    #[test]
    fn test_normalize_to_midnight() {
        let ts = Utc.with_ymd_and_hms(2024, 4, 15, 13, 45, 12).unwrap();
        assert_eq!(
            normalize_to_midnight(ts),
            Utc.with_ymd_and_hms(2024, 4, 15, 0, 0, 0).unwrap()
        );
    }
}
