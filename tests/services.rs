mod common;

use common::{course, setup, student, teacher};
use rust_school_system::errors::SchoolSystemError;
use rust_school_system::integrity::Membership;
use rust_school_system::models::enrollments::records::EnrollmentRecord;

#[tokio::test]
async fn create_then_get_course_keeps_scalars() {
    let (_, services) = setup().await;
    let ada = services
        .teachers
        .create_teacher(Some(teacher("Ada", "Lovelace", "ada@x.com")))
        .await
        .unwrap();
    let teacher_id = ada.id.unwrap();

    let mut record = course("Algorithms", teacher_id);
    record.description = Some("Sorting and searching".to_string());
    let created = services.courses.create_course(Some(record)).await.unwrap();

    assert!(created.id.is_some());
    assert_eq!(created.student_ids, Vec::<i64>::new());

    let loaded = services
        .courses
        .get_course_by_id(created.id.unwrap())
        .await
        .unwrap();
    assert_eq!(loaded.name, "Algorithms");
    assert_eq!(loaded.description.as_deref(), Some("Sorting and searching"));
    assert_eq!(loaded.teacher_id, Some(teacher_id));
}

#[tokio::test]
async fn teacher_deletion_cascades_to_courses() {
    let (storage, services) = setup().await;
    let ada = services
        .teachers
        .create_teacher(Some(teacher("Ada", "Lovelace", "ada@x.com")))
        .await
        .unwrap();
    let teacher_id = ada.id.unwrap();

    let algorithms = services
        .courses
        .create_course(Some(course("Algorithms", teacher_id)))
        .await
        .unwrap();
    let course_id = algorithms.id.unwrap();
    let bob = services
        .students
        .create_student(Some(student("Bob", "Lee", "bob@x.com", &[course_id])))
        .await
        .unwrap();
    services
        .enrollments
        .create_enrollment(Some(EnrollmentRecord {
            student_id: bob.id,
            course_id: Some(course_id),
            ..Default::default()
        }))
        .await
        .unwrap();

    let loaded = services.courses.get_course_by_id(course_id).await.unwrap();
    assert_eq!(loaded.teacher_id, Some(teacher_id));
    let owner = services.teachers.get_teacher_by_id(teacher_id).await.unwrap();
    assert_eq!(owner.course_ids, vec![course_id]);

    services.teachers.delete_teacher(teacher_id).await.unwrap();

    assert!(matches!(
        services.courses.get_course_by_id(course_id).await,
        Err(SchoolSystemError::NotFound(_))
    ));
    assert!(services.courses.list_all_courses().await.unwrap().is_empty());
    assert!(storage.list_memberships().await.unwrap().is_empty());
    assert!(services.enrollments.list_all_enrollments().await.unwrap().is_empty());

    // 学生本身保留，只是不再选修任何课程
    let bob = services.students.get_student_by_id(bob.id.unwrap()).await.unwrap();
    assert!(bob.course_ids.is_empty());
}

#[tokio::test]
async fn student_courses_are_symmetric() {
    let (storage, services) = setup().await;
    let ada = services
        .teachers
        .create_teacher(Some(teacher("Ada", "Lovelace", "ada@x.com")))
        .await
        .unwrap();
    let teacher_id = ada.id.unwrap();
    let c1 = services
        .courses
        .create_course(Some(course("Algorithms", teacher_id)))
        .await
        .unwrap()
        .id
        .unwrap();
    let c2 = services
        .courses
        .create_course(Some(course("Databases", teacher_id)))
        .await
        .unwrap()
        .id
        .unwrap();

    let bob = services
        .students
        .create_student(Some(student("Bob", "Lee", "bob@x.com", &[c2, c1, c2])))
        .await
        .unwrap();
    let bob_id = bob.id.unwrap();

    let loaded = services.students.get_student_by_id(bob_id).await.unwrap();
    assert_eq!(loaded.course_ids, vec![c1, c2]);

    for course_id in [c1, c2] {
        let course = services.courses.get_course_by_id(course_id).await.unwrap();
        assert!(course.student_ids.contains(&bob_id));
    }

    // 课程侧写入的关系同样能从学生侧看到
    let cy = services
        .students
        .create_student(Some(student("Cy", "Young", "cy@x.com", &[])))
        .await
        .unwrap();
    let mut seminar = course("Seminar", teacher_id);
    seminar.student_ids = vec![cy.id.unwrap()];
    let seminar = services.courses.create_course(Some(seminar)).await.unwrap();
    let cy = services.students.get_student_by_id(cy.id.unwrap()).await.unwrap();
    assert_eq!(cy.course_ids, vec![seminar.id.unwrap()]);

    let students = storage.list_students().await.unwrap();
    let courses = storage.list_courses().await.unwrap();
    let from_students = Membership::of_students(&students);
    let from_courses = Membership::of_courses(&courses);
    assert!(from_students.is_mirror_of(&from_courses));
    assert!(
        Membership::from_edges(storage.list_memberships().await.unwrap())
            .is_mirror_of(&from_students)
    );
}

#[tokio::test]
async fn empty_store_lists_are_empty() {
    let (_, services) = setup().await;
    assert!(services.courses.list_all_courses().await.unwrap().is_empty());
    assert!(services.students.list_all_students().await.unwrap().is_empty());
    assert!(services.teachers.list_all_teachers().await.unwrap().is_empty());
    assert!(services.enrollments.list_all_enrollments().await.unwrap().is_empty());
}

#[tokio::test]
async fn unknown_ids_are_not_found() {
    let (_, services) = setup().await;
    assert!(matches!(
        services.courses.get_course_by_id(404).await,
        Err(SchoolSystemError::NotFound(_))
    ));
    assert!(matches!(
        services.students.get_student_by_id(404).await,
        Err(SchoolSystemError::NotFound(_))
    ));
    assert!(matches!(
        services.teachers.get_teacher_by_id(404).await,
        Err(SchoolSystemError::NotFound(_))
    ));
    assert!(matches!(
        services.enrollments.get_enrollment_by_id(404).await,
        Err(SchoolSystemError::NotFound(_))
    ));
}

#[tokio::test]
async fn update_of_missing_entity_changes_nothing() {
    let (_, services) = setup().await;
    services
        .teachers
        .create_teacher(Some(teacher("Ada", "Lovelace", "ada@x.com")))
        .await
        .unwrap();

    let result = services
        .teachers
        .update_teacher(99, Some(teacher("Grace", "Hopper", "grace@x.com")))
        .await;
    assert!(matches!(result, Err(SchoolSystemError::NotFound(_))));

    let teachers = services.teachers.list_all_teachers().await.unwrap();
    assert_eq!(teachers.len(), 1);
    assert_eq!(teachers[0].first_name, "Ada");
}

#[tokio::test]
async fn absent_records_are_invalid_arguments() {
    let (_, services) = setup().await;
    assert!(matches!(
        services.courses.create_course(None).await,
        Err(SchoolSystemError::InvalidArgument(_))
    ));
    assert!(matches!(
        services.students.update_student(1, None).await,
        Err(SchoolSystemError::InvalidArgument(_))
    ));
    assert!(matches!(
        services.teachers.create_teacher(None).await,
        Err(SchoolSystemError::InvalidArgument(_))
    ));
    assert!(matches!(
        services.enrollments.create_enrollment(None).await,
        Err(SchoolSystemError::InvalidArgument(_))
    ));
}

#[tokio::test]
async fn second_delete_is_not_found() {
    let (_, services) = setup().await;
    let bob = services
        .students
        .create_student(Some(student("Bob", "Lee", "bob@x.com", &[])))
        .await
        .unwrap();
    let id = bob.id.unwrap();

    services.students.delete_student(id).await.unwrap();
    assert!(matches!(
        services.students.delete_student(id).await,
        Err(SchoolSystemError::NotFound(_))
    ));

    let ada = services
        .teachers
        .create_teacher(Some(teacher("Ada", "Lovelace", "ada@x.com")))
        .await
        .unwrap();
    let id = ada.id.unwrap();
    services.teachers.delete_teacher(id).await.unwrap();
    assert!(matches!(
        services.teachers.delete_teacher(id).await,
        Err(SchoolSystemError::NotFound(_))
    ));
}

#[tokio::test]
async fn course_with_unknown_teacher_is_rejected() {
    let (_, services) = setup().await;
    let result = services.courses.create_course(Some(course("Algorithms", 42))).await;
    assert_eq!(
        result.unwrap_err(),
        SchoolSystemError::reference_not_found("Teacher not found with id: 42")
    );
    assert!(services.courses.list_all_courses().await.unwrap().is_empty());
}

#[tokio::test]
async fn student_with_unknown_course_is_rejected() {
    let (_, services) = setup().await;
    let result = services
        .students
        .create_student(Some(student("Bob", "Lee", "bob@x.com", &[7])))
        .await;
    assert!(matches!(result, Err(SchoolSystemError::ReferenceNotFound(_))));
    assert!(services.students.list_all_students().await.unwrap().is_empty());
}

#[tokio::test]
async fn validation_runs_before_lookup() {
    let (_, services) = setup().await;
    // 目标不存在，但记录本身不合法，先报校验错误
    let result = services
        .students
        .update_student(99, Some(student("B", "Lee", "bob@x.com", &[])))
        .await;
    assert!(matches!(result, Err(SchoolSystemError::Validation(_))));

    let result = services
        .students
        .create_student(Some(student("Bob", "Lee", "not-an-email", &[])))
        .await;
    assert_eq!(
        result.unwrap_err(),
        SchoolSystemError::validation("Email should be valid")
    );
}

#[tokio::test]
async fn duplicate_email_is_a_constraint_violation() {
    let (_, services) = setup().await;
    services
        .students
        .create_student(Some(student("Bob", "Lee", "bob@x.com", &[])))
        .await
        .unwrap();
    let result = services
        .students
        .create_student(Some(student("Bobby", "Lee", "bob@x.com", &[])))
        .await;
    assert!(matches!(result, Err(SchoolSystemError::ConstraintViolation(_))));

    services
        .teachers
        .create_teacher(Some(teacher("Ada", "Lovelace", "ada@x.com")))
        .await
        .unwrap();
    let result = services
        .teachers
        .create_teacher(Some(teacher("Ada", "King", "ada@x.com")))
        .await;
    assert!(matches!(result, Err(SchoolSystemError::ConstraintViolation(_))));
}

#[tokio::test]
async fn update_changes_scalars_only() {
    let (_, services) = setup().await;
    let ada = services
        .teachers
        .create_teacher(Some(teacher("Ada", "Lovelace", "ada@x.com")))
        .await
        .unwrap();
    let grace = services
        .teachers
        .create_teacher(Some(teacher("Grace", "Hopper", "grace@x.com")))
        .await
        .unwrap();
    let created = services
        .courses
        .create_course(Some(course("Algorithms", ada.id.unwrap())))
        .await
        .unwrap();
    let course_id = created.id.unwrap();
    let bob = services
        .students
        .create_student(Some(student("Bob", "Lee", "bob@x.com", &[course_id])))
        .await
        .unwrap();

    // teacherId 指向存在的教师也不会改变归属
    let mut changes = course("Data Structures", grace.id.unwrap());
    changes.student_ids = vec![];
    let updated = services
        .courses
        .update_course(course_id, Some(changes))
        .await
        .unwrap();
    assert_eq!(updated.name, "Data Structures");
    assert_eq!(updated.teacher_id, ada.id);
    assert_eq!(updated.student_ids, vec![bob.id.unwrap()]);

    // 不存在的教师引用被拒绝
    let result = services
        .courses
        .update_course(course_id, Some(course("Data Structures", 77)))
        .await;
    assert!(matches!(result, Err(SchoolSystemError::ReferenceNotFound(_))));

    let renamed = services
        .students
        .update_student(
            bob.id.unwrap(),
            Some(student("Robert", "Lee", "robert@x.com", &[])),
        )
        .await
        .unwrap();
    assert_eq!(renamed.first_name, "Robert");
    assert_eq!(renamed.email, "robert@x.com");
    assert_eq!(renamed.course_ids, vec![course_id]);

    // 教师的 courseIds 只读
    let mut ada_changes = teacher("Ada", "King", "ada@x.com");
    ada_changes.course_ids = vec![];
    let ada = services
        .teachers
        .update_teacher(ada.id.unwrap(), Some(ada_changes))
        .await
        .unwrap();
    assert_eq!(ada.last_name, "King");
    assert_eq!(ada.course_ids, vec![course_id]);
}

#[tokio::test]
async fn teacher_course_ids_are_ignored_on_create() {
    let (_, services) = setup().await;
    let mut record = teacher("Ada", "Lovelace", "ada@x.com");
    record.course_ids = vec![1, 2, 3];
    let created = services.teachers.create_teacher(Some(record)).await.unwrap();
    assert!(created.course_ids.is_empty());
}

#[tokio::test]
async fn enrollment_references_must_exist() {
    let (_, services) = setup().await;
    let ada = services
        .teachers
        .create_teacher(Some(teacher("Ada", "Lovelace", "ada@x.com")))
        .await
        .unwrap();
    let course_id = services
        .courses
        .create_course(Some(course("Algorithms", ada.id.unwrap())))
        .await
        .unwrap()
        .id;

    let result = services
        .enrollments
        .create_enrollment(Some(EnrollmentRecord {
            student_id: Some(5),
            course_id,
            ..Default::default()
        }))
        .await;
    assert_eq!(
        result.unwrap_err(),
        SchoolSystemError::reference_not_found("Student not found with id: 5")
    );

    let result = services
        .enrollments
        .create_enrollment(Some(EnrollmentRecord {
            course_id,
            ..Default::default()
        }))
        .await;
    assert!(matches!(result, Err(SchoolSystemError::Validation(_))));

    assert!(services.enrollments.list_all_enrollments().await.unwrap().is_empty());
}

#[tokio::test]
async fn enrollment_lifecycle() {
    let (_, services) = setup().await;
    let ada = services
        .teachers
        .create_teacher(Some(teacher("Ada", "Lovelace", "ada@x.com")))
        .await
        .unwrap();
    let course_id = services
        .courses
        .create_course(Some(course("Algorithms", ada.id.unwrap())))
        .await
        .unwrap()
        .id;
    let student_id = services
        .students
        .create_student(Some(student("Bob", "Lee", "bob@x.com", &[])))
        .await
        .unwrap()
        .id;

    let date = chrono::NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
    let created = services
        .enrollments
        .create_enrollment(Some(EnrollmentRecord {
            student_id,
            course_id,
            enrollment_date: Some(date),
            ..Default::default()
        }))
        .await
        .unwrap();
    let id = created.id.unwrap();
    assert_eq!(created.enrollment_date, Some(date));

    let undated = services
        .enrollments
        .create_enrollment(Some(EnrollmentRecord {
            student_id,
            course_id,
            ..Default::default()
        }))
        .await
        .unwrap();
    assert!(undated.enrollment_date.is_some());

    let loaded = services.enrollments.get_enrollment_by_id(id).await.unwrap();
    assert_eq!(loaded.student_id, student_id);
    assert_eq!(loaded.course_id, course_id);

    services.enrollments.delete_enrollment(id).await.unwrap();
    assert!(matches!(
        services.enrollments.delete_enrollment(id).await,
        Err(SchoolSystemError::NotFound(_))
    ));

    // 删除学生时其余选课记录一并删除
    services
        .students
        .delete_student(student_id.unwrap())
        .await
        .unwrap();
    assert!(services.enrollments.list_all_enrollments().await.unwrap().is_empty());
}

#[tokio::test]
async fn course_deletion_clears_memberships() {
    let (storage, services) = setup().await;
    let ada = services
        .teachers
        .create_teacher(Some(teacher("Ada", "Lovelace", "ada@x.com")))
        .await
        .unwrap();
    let course_id = services
        .courses
        .create_course(Some(course("Algorithms", ada.id.unwrap())))
        .await
        .unwrap()
        .id
        .unwrap();
    let bob = services
        .students
        .create_student(Some(student("Bob", "Lee", "bob@x.com", &[course_id])))
        .await
        .unwrap();

    services.courses.delete_course(course_id).await.unwrap();

    assert!(storage.list_memberships().await.unwrap().is_empty());
    let bob = services.students.get_student_by_id(bob.id.unwrap()).await.unwrap();
    assert!(bob.course_ids.is_empty());
    let ada = services.teachers.get_teacher_by_id(ada.id.unwrap()).await.unwrap();
    assert!(ada.course_ids.is_empty());
}

#[tokio::test]
async fn student_deletion_clears_memberships() {
    let (storage, services) = setup().await;
    let ada = services
        .teachers
        .create_teacher(Some(teacher("Ada", "Lovelace", "ada@x.com")))
        .await
        .unwrap();
    let course_id = services
        .courses
        .create_course(Some(course("Algorithms", ada.id.unwrap())))
        .await
        .unwrap()
        .id
        .unwrap();
    let bob = services
        .students
        .create_student(Some(student("Bob", "Lee", "bob@x.com", &[course_id])))
        .await
        .unwrap();
    let bob_id = bob.id.unwrap();
    services
        .enrollments
        .create_enrollment(Some(EnrollmentRecord {
            student_id: Some(bob_id),
            course_id: Some(course_id),
            ..Default::default()
        }))
        .await
        .unwrap();
    assert_eq!(storage.list_memberships().await.unwrap().len(), 1);

    services.students.delete_student(bob_id).await.unwrap();

    assert!(storage.list_memberships().await.unwrap().is_empty());
    let algorithms = services.courses.get_course_by_id(course_id).await.unwrap();
    assert!(algorithms.student_ids.is_empty());
    assert!(services.enrollments.list_all_enrollments().await.unwrap().is_empty());
}
