pub use super::attendance_records::Entity as AttendanceRecords;
pub use super::divisions::Entity as Divisions;
pub use super::teacher_assignments::Entity as TeacherAssignments;
pub use super::test_marks::Entity as TestMarks;
pub use super::tests::Entity as Tests;
pub use super::users::Entity as Users;
