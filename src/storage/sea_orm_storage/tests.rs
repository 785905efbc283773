use super::SeaOrmStorage;
use crate::entity::test_marks::{
    ActiveModel as MarkActiveModel, Column as MarkColumn, Entity as TestMarks,
};
use crate::entity::tests::{ActiveModel, Column, Entity as Tests};
use crate::errors::{AcadSysError, Result};
use crate::models::tests::{
    entities::{Test, TestMark},
    requests::{MarkEntry, NewTest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建测验
    pub async fn create_test_impl(&self, test: NewTest) -> Result<Test> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(test.name),
            year: Set(test.year),
            date: Set(test.date.timestamp()),
            total_marks: Set(test.total_marks),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AcadSysError::database_operation(format!("创建测验失败: {e}")))?;

        Ok(result.into_test())
    }

    /// 通过 ID 获取测验
    pub async fn get_test_by_id_impl(&self, id: i64) -> Result<Option<Test>> {
        let result = Tests::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| AcadSysError::database_operation(format!("查询测验失败: {e}")))?;

        Ok(result.map(|m| m.into_test()))
    }

    /// 列出某年级的测验，按日期倒序
    pub async fn list_tests_by_year_impl(&self, year: &str) -> Result<Vec<Test>> {
        let tests = Tests::find()
            .filter(Column::Year.eq(year))
            .order_by_desc(Column::Date)
            .all(&self.db)
            .await
            .map_err(|e| AcadSysError::database_operation(format!("查询测验列表失败: {e}")))?;

        Ok(tests.into_iter().map(|m| m.into_test()).collect())
    }

    /// 按 (student, test, subject) 自然键 upsert 成绩
    ///
    /// 已存在则覆盖得分并刷新 graded_on，不存在则插入。
    pub async fn upsert_test_mark_impl(&self, entry: MarkEntry) -> Result<TestMark> {
        let now = chrono::Utc::now().timestamp();

        let existing = TestMarks::find()
            .filter(MarkColumn::StudentId.eq(entry.student_id))
            .filter(MarkColumn::TestId.eq(entry.test_id))
            .filter(MarkColumn::Subject.eq(entry.subject.to_string()))
            .one(&self.db)
            .await
            .map_err(|e| AcadSysError::database_operation(format!("查询成绩失败: {e}")))?;

        let saved = match existing {
            Some(model) => {
                let mut active: MarkActiveModel = model.into();
                active.marks_obtained = Set(entry.marks_obtained);
                active.graded_on = Set(now);
                active
                    .update(&self.db)
                    .await
                    .map_err(|e| AcadSysError::database_operation(format!("更新成绩失败: {e}")))?
            }
            None => {
                let active = MarkActiveModel {
                    student_id: Set(entry.student_id),
                    test_id: Set(entry.test_id),
                    subject: Set(entry.subject.to_string()),
                    marks_obtained: Set(entry.marks_obtained),
                    graded_on: Set(now),
                    ..Default::default()
                };
                active
                    .insert(&self.db)
                    .await
                    .map_err(|e| AcadSysError::database_operation(format!("保存成绩失败: {e}")))?
            }
        };

        Ok(saved.into_mark())
    }

    /// 查询一个学生的全部成绩（带所属测验）
    pub async fn find_test_marks_with_tests_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<(TestMark, Test)>> {
        self.find_test_marks_with_tests_by_students_impl(&[student_id])
            .await
    }

    /// 批量查询多个学生的全部成绩（带所属测验），按插入顺序返回
    pub async fn find_test_marks_with_tests_by_students_impl(
        &self,
        student_ids: &[i64],
    ) -> Result<Vec<(TestMark, Test)>> {
        if student_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = TestMarks::find()
            .filter(MarkColumn::StudentId.is_in(student_ids.iter().copied()))
            .order_by_asc(MarkColumn::Id)
            .find_also_related(Tests)
            .all(&self.db)
            .await
            .map_err(|e| AcadSysError::database_operation(format!("查询成绩失败: {e}")))?;

        let mut marks = Vec::with_capacity(rows.len());
        for (mark, test) in rows {
            let test = test.ok_or_else(|| {
                AcadSysError::database_operation(format!(
                    "成绩 {} 引用的测验 {} 不存在",
                    mark.id, mark.test_id
                ))
            })?;
            marks.push((mark.into_mark(), test.into_test()));
        }

        Ok(marks)
    }
}
