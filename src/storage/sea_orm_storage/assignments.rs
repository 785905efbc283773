use super::SeaOrmStorage;
use crate::entity::teacher_assignments::{ActiveModel, Column, Entity as TeacherAssignments};
use crate::errors::{AcadSysError, Result};
use crate::models::assignments::entities::TeacherAssignment;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 指派教师到分组
    pub async fn create_assignment_impl(
        &self,
        teacher_id: i64,
        division_id: i64,
    ) -> Result<TeacherAssignment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            teacher_id: Set(teacher_id),
            division_id: Set(division_id),
            assigned_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AcadSysError::database_operation(format!("指派教师失败: {e}")))?;

        Ok(result.into_assignment())
    }

    /// 查询某教师对某分组的指派
    pub async fn get_assignment_impl(
        &self,
        teacher_id: i64,
        division_id: i64,
    ) -> Result<Option<TeacherAssignment>> {
        let result = TeacherAssignments::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .filter(Column::DivisionId.eq(division_id))
            .one(&self.db)
            .await
            .map_err(|e| AcadSysError::database_operation(format!("查询指派失败: {e}")))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    /// 列出全部指派，新的在前
    pub async fn list_assignments_impl(&self) -> Result<Vec<TeacherAssignment>> {
        let assignments = TeacherAssignments::find()
            .order_by_desc(Column::AssignedAt)
            .all(&self.db)
            .await
            .map_err(|e| AcadSysError::database_operation(format!("查询指派列表失败: {e}")))?;

        Ok(assignments
            .into_iter()
            .map(|m| m.into_assignment())
            .collect())
    }

    /// 列出某教师的全部指派，新的在前
    pub async fn list_assignments_by_teacher_impl(
        &self,
        teacher_id: i64,
    ) -> Result<Vec<TeacherAssignment>> {
        let assignments = TeacherAssignments::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .order_by_desc(Column::AssignedAt)
            .all(&self.db)
            .await
            .map_err(|e| AcadSysError::database_operation(format!("查询指派列表失败: {e}")))?;

        Ok(assignments
            .into_iter()
            .map(|m| m.into_assignment())
            .collect())
    }
}
