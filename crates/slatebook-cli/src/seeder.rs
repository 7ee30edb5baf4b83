//! Demo-data seeding.
//!
//! Fills a store with fake students, teachers, and linked parents for local
//! development and demos. Everything goes through the regular registration
//! flows, so seeded data passes the same uniqueness checks real
//! registrations do.

use anyhow::{Context, Result};
use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName, Name};
use fake::faker::phone_number::en::PhoneNumber;
use slatebook_auth::{register_parent, register_student, register_teacher};
use slatebook_models::{
    RegisterParentDto, RegisterStudentDto, RegisterTeacherDto, catalog,
};
use slatebook_store::Store;
use std::time::Instant;

/// Password assigned to every seeded teacher. Satisfies the portal policy.
const SEED_TEACHER_PASSWORD: &str = "Teacher@123";

/// Admission-number prefix stamped onto seeded students.
const SEED_ADMISSION_PREFIX: &str = "AS2025";

/// How much demo data to create.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub students: usize,
    pub teachers: usize,
    /// Whether each seeded student also gets a linked parent account.
    pub with_parents: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            students: 25,
            teachers: 5,
            with_parents: true,
        }
    }
}

/// Seed students, teachers, and (optionally) parents in one pass.
pub fn seed_all(store: &Store, config: SeedConfig) -> Result<()> {
    let start = Instant::now();

    let students = seed_students(store, config.students)?;
    println!("✅ Created {} students", students);

    let teachers = seed_teachers(store, config.teachers)?;
    println!("✅ Created {} teachers", teachers);

    if config.with_parents {
        let parents = seed_parents(store)?;
        println!("✅ Created {} parent accounts", parents);
    }

    println!("   Done in {:.2?}", start.elapsed());
    Ok(())
}

/// Seed fake students, spreading them across the class catalog.
///
/// Admission numbers continue from the highest seeded number already
/// present, so repeated runs keep appending instead of colliding.
pub fn seed_students(store: &Store, count: usize) -> Result<usize> {
    let offset = next_admission_offset(store)?;

    for i in 0..count {
        let class_name = catalog::CLASSES[i % catalog::CLASSES.len()];
        let dto = RegisterStudentDto {
            name: Name().fake(),
            admission_number: format!("{}{:03}", SEED_ADMISSION_PREFIX, offset + i),
            class_name: class_name.to_string(),
        };
        register_student(store, dto).context("seeding student")?;
    }
    Ok(count)
}

/// Seed fake teachers, rotating subject pairs through the catalog.
pub fn seed_teachers(store: &Store, count: usize) -> Result<usize> {
    let existing = store.teachers().context("reading teachers")?.len();

    for i in 0..count {
        let first: String = FirstName().fake();
        let last: String = LastName().fake();
        let subjects = catalog::ALL_SUBJECTS;
        let dto = RegisterTeacherDto {
            name: format!("{} {}", first, last),
            // Index suffix keeps generated emails unique across runs.
            email: format!(
                "{}.{}{}@accuratestep.edu.ng",
                first.to_lowercase(),
                last.to_lowercase(),
                existing + i
            ),
            password: SEED_TEACHER_PASSWORD.to_string(),
            subjects: vec![
                subjects[i % subjects.len()].to_string(),
                subjects[(i + 7) % subjects.len()].to_string(),
            ],
        };
        register_teacher(store, dto).context("seeding teacher")?;
    }
    Ok(count)
}

/// Create a parent account for every student that has none yet.
pub fn seed_parents(store: &Store) -> Result<usize> {
    let students = store.students().context("reading students")?;
    let linked: Vec<String> = store
        .parents()
        .context("reading parents")?
        .into_iter()
        .map(|p| p.child_admission_number)
        .collect();

    let mut created = 0;
    for student in students {
        if linked.contains(&student.admission_number) {
            continue;
        }
        let dto = RegisterParentDto {
            name: Name().fake(),
            email: SafeEmail().fake(),
            child_admission_number: student.admission_number,
            phone_number: PhoneNumber().fake(),
        };
        register_parent(store, dto).context("seeding parent")?;
        created += 1;
    }
    Ok(created)
}

fn next_admission_offset(store: &Store) -> Result<usize> {
    let max = store
        .students()
        .context("reading students")?
        .iter()
        .filter_map(|s| s.admission_number.strip_prefix(SEED_ADMISSION_PREFIX))
        .filter_map(|tail| tail.parse::<usize>().ok())
        .max();
    Ok(max.map_or(1, |n| n + 1))
}
