use crate::models::Teacher;

/// Read access to the teacher records served by the API
///
/// Handlers receive an implementation through application state, so tests
/// can inject their own collection and a persistent store can replace the
/// in-memory one without touching the routes.
pub trait TeacherRepository: Send + Sync {
    /// All records, in insertion order
    fn all(&self) -> &[Teacher];

    fn len(&self) -> usize {
        self.all().len()
    }

    fn is_empty(&self) -> bool {
        self.all().is_empty()
    }
}

/// Fixed in-memory teacher collection, built once at startup
#[derive(Debug, Clone, Default)]
pub struct InMemoryTeacherRepository {
    teachers: Vec<Teacher>,
}

impl InMemoryTeacherRepository {
    pub fn new(teachers: Vec<Teacher>) -> Self {
        Self { teachers }
    }

    /// Repository holding the default seed records
    pub fn seeded() -> Self {
        Self::new(seed_teachers())
    }
}

impl TeacherRepository for InMemoryTeacherRepository {
    fn all(&self) -> &[Teacher] {
        &self.teachers
    }
}

/// Default seed records
pub fn seed_teachers() -> Vec<Teacher> {
    vec![
        // Indore center
        Teacher::new(1, "Rahul Sharma", "Maths", 22.7196, 75.8577),
        Teacher::new(2, "Priya Singh", "Physics", 22.7250, 75.8600),
        // Delhi
        Teacher::new(3, "Amit Verma", "Chemistry", 28.7041, 77.1025),
    ]
}
