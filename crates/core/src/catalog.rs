//! The fixed course table.

use crate::model::{Course, CourseError, CourseId, CourseLevel};

/// Read-only list of offered courses, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    /// Wrap a list of courses.
    ///
    /// # Errors
    ///
    /// Returns `CourseError::InvalidId` if two courses share an id.
    pub fn new(courses: Vec<Course>) -> Result<Self, CourseError> {
        for (idx, course) in courses.iter().enumerate() {
            if courses[..idx].iter().any(|other| other.id() == course.id()) {
                return Err(CourseError::InvalidId);
            }
        }
        Ok(Self { courses })
    }

    /// The five courses shipped with the site.
    ///
    /// # Panics
    ///
    /// Panics if the built-in table is invalid, which the tests rule out.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(builtin_courses().expect("built-in courses are valid"))
            .expect("built-in course ids are unique")
    }

    #[must_use]
    pub fn get(&self, id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|course| course.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: CourseId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter()
    }

    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn topics(items: &[&str]) -> Vec<String> {
    items.iter().map(|t| (*t).to_owned()).collect()
}

fn builtin_courses() -> Result<Vec<Course>, CourseError> {
    Ok(vec![
        Course::new(
            CourseId::new(1),
            "JavaScript Fundamentals",
            "Master the fundamentals of JavaScript programming. Learn variables, functions, \
             objects, arrays, and DOM manipulation. Perfect for beginners starting their web \
             development journey.",
            8,
            CourseLevel::Beginner,
            1234,
            topics(&[
                "Variables and Data Types",
                "Functions and Scope",
                "DOM Manipulation",
                "Event Handling",
                "Asynchronous Programming",
            ]),
            "JS",
        )?,
        Course::new(
            CourseId::new(2),
            "Advanced CSS Techniques",
            "Take your CSS skills to the next level with advanced techniques. Learn Flexbox, \
             Grid, animations, and modern layout methods. Create stunning, responsive designs.",
            6,
            CourseLevel::Intermediate,
            987,
            topics(&[
                "CSS Grid and Flexbox",
                "CSS Animations",
                "Responsive Design",
                "CSS Variables",
                "Modern Layout Techniques",
            ]),
            "CSS",
        )?,
        Course::new(
            CourseId::new(3),
            "HTML5 & Web Structure",
            "Build solid foundations with semantic HTML5. Learn modern HTML elements, \
             accessibility best practices, and how to create well-structured web pages.",
            4,
            CourseLevel::Beginner,
            1567,
            topics(&[
                "Semantic HTML Elements",
                "Forms and Input Types",
                "Accessibility Guidelines",
                "Meta Tags and SEO",
                "HTML5 APIs",
            ]),
            "HTML",
        )?,
        Course::new(
            CourseId::new(4),
            "React Fundamentals",
            "Learn React.js from scratch. Build dynamic user interfaces with components, state \
             management, and hooks. Perfect for modern web development.",
            10,
            CourseLevel::Intermediate,
            2456,
            topics(&[
                "React Components",
                "State and Props",
                "React Hooks",
                "Event Handling",
                "Component Lifecycle",
            ]),
            "REACT",
        )?,
        Course::new(
            CourseId::new(5),
            "Node.js Backend Development",
            "Build powerful backend applications with Node.js. Learn server-side JavaScript, \
             APIs, databases, and deployment strategies.",
            12,
            CourseLevel::Advanced,
            1789,
            topics(&[
                "Express.js Framework",
                "REST API Development",
                "Database Integration",
                "Authentication & Security",
                "Deployment Strategies",
            ]),
            "NODE",
        )?,
    ])
}
