//! Ordered collections of users, courses and enrollments.
//!
//! `Collections` is the unit guarded by an [`EntityStore`](super::ports::EntityStore).
//! Lookups are linear scans; every list preserves insertion order and
//! removals keep the relative order of the survivors.

use super::{
    Course, CourseCode, CourseDraft, CourseId, EmailAddress, Enrollment, EnrollmentId,
    NewEnrollment, NewUser, User, UserId, ids::IdSequence,
};

/// In-process state for the whole service.
#[derive(Debug, Default, Clone)]
pub struct Collections {
    users: Vec<User>,
    courses: Vec<Course>,
    enrollments: Vec<Enrollment>,
    user_ids: IdSequence,
    course_ids: IdSequence,
    enrollment_ids: IdSequence,
}

impl Collections {
    pub fn new() -> Self {
        Self::default()
    }

    // Users

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id() == id)
    }

    pub fn user_by_email(&self, email: &EmailAddress) -> Option<&User> {
        self.users.iter().find(|user| user.email() == email)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Assign the next user id and append the user. Uniqueness is the
    /// caller's responsibility.
    pub fn insert_user(&mut self, draft: NewUser) -> &User {
        let id = UserId::new(self.user_ids.next());
        let index = self.users.len();
        self.users.push(User::from_new(id, draft));
        &self.users[index]
    }

    // Courses

    pub fn course(&self, id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|course| course.id() == id)
    }

    pub fn course_mut(&mut self, id: CourseId) -> Option<&mut Course> {
        self.courses.iter_mut().find(|course| course.id() == id)
    }

    pub fn course_by_code(&self, code: &CourseCode) -> Option<&Course> {
        self.courses.iter().find(|course| course.code() == code)
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn insert_course(&mut self, draft: CourseDraft) -> &Course {
        let id = CourseId::new(self.course_ids.next());
        let index = self.courses.len();
        self.courses.push(Course::from_draft(id, draft));
        &self.courses[index]
    }

    /// Remove the course, leaving its enrollments untouched.
    pub fn remove_course(&mut self, id: CourseId) -> Option<Course> {
        let index = self.courses.iter().position(|course| course.id() == id)?;
        Some(self.courses.remove(index))
    }

    // Enrollments

    pub fn enrollment(&self, id: EnrollmentId) -> Option<&Enrollment> {
        self.enrollments.iter().find(|enrollment| enrollment.id() == id)
    }

    pub fn enrollments(&self) -> &[Enrollment] {
        &self.enrollments
    }

    /// Enrollments matching `predicate`, in insertion order.
    pub fn enrollments_where<P>(&self, mut predicate: P) -> Vec<Enrollment>
    where
        P: FnMut(&Enrollment) -> bool,
    {
        self.enrollments
            .iter()
            .filter(|enrollment| predicate(enrollment))
            .copied()
            .collect()
    }

    pub fn enrollments_for_user(&self, user_id: UserId) -> Vec<Enrollment> {
        self.enrollments_where(|enrollment| enrollment.user_id() == user_id)
    }

    pub fn enrollments_for_course(&self, course_id: CourseId) -> Vec<Enrollment> {
        self.enrollments_where(|enrollment| enrollment.course_id() == course_id)
    }

    pub fn enrollment_exists(&self, user_id: UserId, course_id: CourseId) -> bool {
        self.enrollments
            .iter()
            .any(|enrollment| enrollment.links(user_id, course_id))
    }

    pub fn insert_enrollment(&mut self, request: NewEnrollment) -> Enrollment {
        let id = EnrollmentId::new(self.enrollment_ids.next());
        let enrollment = Enrollment::from_new(id, request);
        self.enrollments.push(enrollment);
        enrollment
    }

    pub fn remove_enrollment(&mut self, id: EnrollmentId) -> Option<Enrollment> {
        let index = self
            .enrollments
            .iter()
            .position(|enrollment| enrollment.id() == id)?;
        Some(self.enrollments.remove(index))
    }

    /// Drop every enrollment referencing `course_id`; returns how many went.
    pub fn remove_enrollments_for_course(&mut self, course_id: CourseId) -> usize {
        let before = self.enrollments.len();
        self.enrollments
            .retain(|enrollment| enrollment.course_id() != course_id);
        before - self.enrollments.len()
    }
}
