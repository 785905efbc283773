use super::SeaOrmStorage;
use crate::entity::divisions::{ActiveModel, Column, Entity as Divisions};
use crate::errors::{AcadSysError, Result};
use crate::models::divisions::{entities::Division, requests::CreateDivisionRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建分组
    pub async fn create_division_impl(&self, req: CreateDivisionRequest) -> Result<Division> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            year: Set(req.year),
            branch: Set(req.branch),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AcadSysError::database_operation(format!("创建分组失败: {e}")))?;

        Ok(result.into_division())
    }

    /// 通过 ID 获取分组
    pub async fn get_division_by_id_impl(&self, id: i64) -> Result<Option<Division>> {
        let result = Divisions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AcadSysError::database_operation(format!("查询分组失败: {e}")))?;

        Ok(result.map(|m| m.into_division()))
    }

    /// 通过 (name, year, branch) 获取分组
    pub async fn find_division_impl(
        &self,
        name: &str,
        year: &str,
        branch: &str,
    ) -> Result<Option<Division>> {
        let result = Divisions::find()
            .filter(Column::Name.eq(name))
            .filter(Column::Year.eq(year))
            .filter(Column::Branch.eq(branch))
            .one(&self.db)
            .await
            .map_err(|e| AcadSysError::database_operation(format!("查询分组失败: {e}")))?;

        Ok(result.map(|m| m.into_division()))
    }

    /// 列出某年级的分组
    pub async fn list_divisions_by_year_impl(&self, year: &str) -> Result<Vec<Division>> {
        let divisions = Divisions::find()
            .filter(Column::Year.eq(year))
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| AcadSysError::database_operation(format!("查询分组列表失败: {e}")))?;

        Ok(divisions.into_iter().map(|m| m.into_division()).collect())
    }

    /// 按 ID 批量获取分组
    pub async fn list_divisions_by_ids_impl(&self, ids: &[i64]) -> Result<Vec<Division>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let divisions = Divisions::find()
            .filter(Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
            .map_err(|e| AcadSysError::database_operation(format!("查询分组失败: {e}")))?;

        Ok(divisions.into_iter().map(|m| m.into_division()).collect())
    }
}
