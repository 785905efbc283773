use super::SeaOrmStorage;
use crate::entity::attendance_records::{ActiveModel, Column, Entity as AttendanceRecords};
use crate::errors::{AcadSysError, Result};
use crate::models::attendance::{
    entities::AttendanceRecord,
    requests::{AttendanceFilter, UpsertAttendanceRecord},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 按 (student, date) 自然键 upsert 考勤记录
    ///
    /// 已存在则整条覆盖（后写覆盖先写），不存在则插入。
    pub async fn upsert_attendance_impl(
        &self,
        record: UpsertAttendanceRecord,
    ) -> Result<AttendanceRecord> {
        let existing = AttendanceRecords::find()
            .filter(Column::StudentId.eq(record.student_id))
            .filter(Column::Date.eq(record.date.timestamp()))
            .one(&self.db)
            .await
            .map_err(|e| AcadSysError::database_operation(format!("查询考勤记录失败: {e}")))?;

        let saved = match existing {
            Some(model) => {
                let mut active: ActiveModel = model.into();
                active.year = Set(record.year);
                active.branch = Set(record.branch);
                active.division_id = Set(record.division_id);
                active.status = Set(record.status.to_string());
                active.reason = Set(record.reason);
                active.recorded_by = Set(record.recorded_by);
                active
                    .update(&self.db)
                    .await
                    .map_err(|e| AcadSysError::database_operation(format!("更新考勤记录失败: {e}")))?
            }
            None => {
                let active = ActiveModel {
                    student_id: Set(record.student_id),
                    year: Set(record.year),
                    branch: Set(record.branch),
                    division_id: Set(record.division_id),
                    date: Set(record.date.timestamp()),
                    status: Set(record.status.to_string()),
                    reason: Set(record.reason),
                    recorded_by: Set(record.recorded_by),
                    ..Default::default()
                };
                active
                    .insert(&self.db)
                    .await
                    .map_err(|e| AcadSysError::database_operation(format!("保存考勤记录失败: {e}")))?
            }
        };

        Ok(saved.into_record())
    }

    /// 按条件查询考勤记录
    ///
    /// 结果按插入顺序（ID 升序）返回，缺勤名单的对外顺序依赖这一点。
    pub async fn find_attendance_impl(
        &self,
        filter: AttendanceFilter,
    ) -> Result<Vec<AttendanceRecord>> {
        let mut select = AttendanceRecords::find();

        if let Some(student_id) = filter.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }
        if let Some(division_id) = filter.division_id {
            select = select.filter(Column::DivisionId.eq(division_id));
        }
        if let Some(ref division_ids) = filter.division_ids {
            select = select.filter(Column::DivisionId.is_in(division_ids.iter().copied()));
        }
        if let Some(ref year) = filter.year {
            select = select.filter(Column::Year.eq(year.clone()));
        }
        if let Some(status) = filter.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }
        if let Some(from) = filter.date_from {
            select = select.filter(Column::Date.gte(from.timestamp()));
        }
        if let Some(to) = filter.date_to {
            select = select.filter(Column::Date.lte(to.timestamp()));
        }

        let records = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| AcadSysError::database_operation(format!("查询考勤记录失败: {e}")))?;

        Ok(records.into_iter().map(|m| m.into_record()).collect())
    }

    /// 更新某学生某天的请假原因
    pub async fn update_attendance_reason_impl(
        &self,
        student_id: i64,
        date: chrono::DateTime<chrono::Utc>,
        reason: &str,
    ) -> Result<Option<AttendanceRecord>> {
        let existing = AttendanceRecords::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::Date.eq(date.timestamp()))
            .one(&self.db)
            .await
            .map_err(|e| AcadSysError::database_operation(format!("查询考勤记录失败: {e}")))?;

        let Some(model) = existing else {
            return Ok(None);
        };

        let mut active: ActiveModel = model.into();
        active.reason = Set(reason.to_string());
        let updated = active
            .update(&self.db)
            .await
            .map_err(|e| AcadSysError::database_operation(format!("更新请假原因失败: {e}")))?;

        Ok(Some(updated.into_record()))
    }
}
