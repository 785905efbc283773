use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建班级分组表（users 的外键引用它，先建）
        manager
            .create_table(
                Table::create()
                    .table(Divisions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Divisions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Divisions::Name).string().not_null())
                    .col(ColumnDef::new(Divisions::Year).string().not_null())
                    .col(ColumnDef::new(Divisions::Branch).string().not_null())
                    .col(
                        ColumnDef::new(Divisions::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 分组在 (name, year, branch) 上唯一
        manager
            .create_index(
                Index::create()
                    .name("idx_divisions_name_year_branch")
                    .table(Divisions::Table)
                    .col(Divisions::Name)
                    .col(Divisions::Year)
                    .col(Divisions::Branch)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // 创建用户表（管理员 / 教师 / 学生统一存放，按 role 区分）
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::Email).string().null())
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::Status).string().not_null())
                    .col(ColumnDef::new(Users::Name).string().null())
                    .col(ColumnDef::new(Users::Year).string().null())
                    .col(ColumnDef::new(Users::Branch).string().null())
                    .col(ColumnDef::new(Users::Designation).string().null())
                    .col(ColumnDef::new(Users::DivisionId).big_integer().null())
                    .col(ColumnDef::new(Users::Prn).string().null().unique_key())
                    .col(ColumnDef::new(Users::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Users::Table, Users::DivisionId)
                            .to(Divisions::Table, Divisions::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建教师-分组指派表
        manager
            .create_table(
                Table::create()
                    .table(TeacherAssignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TeacherAssignments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TeacherAssignments::TeacherId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TeacherAssignments::DivisionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TeacherAssignments::AssignedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TeacherAssignments::Table, TeacherAssignments::TeacherId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TeacherAssignments::Table, TeacherAssignments::DivisionId)
                            .to(Divisions::Table, Divisions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 同一教师对同一分组只允许一条指派
        manager
            .create_index(
                Index::create()
                    .name("idx_teacher_assignments_teacher_division")
                    .table(TeacherAssignments::Table)
                    .col(TeacherAssignments::TeacherId)
                    .col(TeacherAssignments::DivisionId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // 创建考勤记录表
        // year / branch / division 为写入时从学生快照的值，保证历史记录稳定
        manager
            .create_table(
                Table::create()
                    .table(AttendanceRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AttendanceRecords::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AttendanceRecords::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AttendanceRecords::Year).string().not_null())
                    .col(
                        ColumnDef::new(AttendanceRecords::Branch)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AttendanceRecords::DivisionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AttendanceRecords::Date)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AttendanceRecords::Status)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AttendanceRecords::Reason)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(AttendanceRecords::RecordedBy)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AttendanceRecords::Table, AttendanceRecords::StudentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AttendanceRecords::Table, AttendanceRecords::DivisionId)
                            .to(Divisions::Table, Divisions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AttendanceRecords::Table, AttendanceRecords::RecordedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 自然键：每个学生每天至多一条记录
        manager
            .create_index(
                Index::create()
                    .name("idx_attendance_student_date")
                    .table(AttendanceRecords::Table)
                    .col(AttendanceRecords::StudentId)
                    .col(AttendanceRecords::Date)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // 按分组+日期的查询走这个索引
        manager
            .create_index(
                Index::create()
                    .name("idx_attendance_division_date")
                    .table(AttendanceRecords::Table)
                    .col(AttendanceRecords::DivisionId)
                    .col(AttendanceRecords::Date)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // 创建测验表
        manager
            .create_table(
                Table::create()
                    .table(Tests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tests::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tests::Name).string().not_null())
                    .col(ColumnDef::new(Tests::Year).string().not_null())
                    .col(ColumnDef::new(Tests::Date).big_integer().not_null())
                    .col(ColumnDef::new(Tests::TotalMarks).double().not_null())
                    .col(ColumnDef::new(Tests::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建测验成绩表
        manager
            .create_table(
                Table::create()
                    .table(TestMarks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TestMarks::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TestMarks::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TestMarks::TestId).big_integer().not_null())
                    .col(ColumnDef::new(TestMarks::Subject).string().not_null())
                    .col(
                        ColumnDef::new(TestMarks::MarksObtained)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TestMarks::GradedOn).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(TestMarks::Table, TestMarks::StudentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TestMarks::Table, TestMarks::TestId)
                            .to(Tests::Table, Tests::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 自然键：每个学生每场测验每科至多一条成绩
        manager
            .create_index(
                Index::create()
                    .name("idx_test_marks_student_test_subject")
                    .table(TestMarks::Table)
                    .col(TestMarks::StudentId)
                    .col(TestMarks::TestId)
                    .col(TestMarks::Subject)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TestMarks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tests::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AttendanceRecords::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TeacherAssignments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Divisions::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    Role,
    Status,
    Name,
    Year,
    Branch,
    Designation,
    DivisionId,
    Prn,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Divisions {
    Table,
    Id,
    Name,
    Year,
    Branch,
    CreatedAt,
}

#[derive(DeriveIden)]
enum TeacherAssignments {
    Table,
    Id,
    TeacherId,
    DivisionId,
    AssignedAt,
}

#[derive(DeriveIden)]
enum AttendanceRecords {
    Table,
    Id,
    StudentId,
    Year,
    Branch,
    DivisionId,
    Date,
    Status,
    Reason,
    RecordedBy,
}

#[derive(DeriveIden)]
enum Tests {
    Table,
    Id,
    Name,
    Year,
    Date,
    TotalMarks,
    CreatedAt,
}

#[derive(DeriveIden)]
enum TestMarks {
    Table,
    Id,
    StudentId,
    TestId,
    Subject,
    MarksObtained,
    GradedOn,
}
