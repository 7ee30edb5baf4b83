//! The store: sole owner of the persisted document.
//!
//! Every read deserializes the full current document from the adapter and
//! every mutation is read-modify-write of the whole document. Nothing is
//! cached across calls, so a read immediately after a write always observes
//! the write. The contract is deliberately last-write-wins at whole-document
//! granularity: there is no locking or versioning token, and two processes
//! sharing one adapter key can silently overwrite each other. Callers that
//! need uniqueness (admission numbers, teacher emails) must pre-check before
//! inserting; the store appends unconditionally.

use crate::document::{SCHEMA_VERSION, SchoolDocument};
use crate::error::StoreError;
use slatebook_core::{StorageAdapter, generate_id};
use slatebook_models::{
    Announcement, AnnouncementId, Assessment, GalleryItem, GalleryItemId, LessonNote, Parent,
    ParentId, Payment, Settings, SettingsUpdate, Student, StudentId, StudentUpdate, SubjectResult,
    Teacher, TeacherId, TeacherUpdate, Video,
};
use tracing::{debug, instrument, warn};

/// What to do when the persisted document is missing or unreadable.
///
/// The original portal had no policy at all (a corrupt blob crashed the
/// page); picking one is an explicit requirement here. `Fail` is the
/// default: corruption is surfaced to the caller instead of silently
/// destroying whatever is left of the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorruptionPolicy {
    /// Surface [`StoreError::Corrupted`] / [`StoreError::Missing`].
    #[default]
    Fail,
    /// Replace the unreadable document with a fresh seed and continue.
    Reseed,
}

/// Sole owner of the persisted document.
///
/// Construct one per process and pass it by reference to every component;
/// the adapter is injected so the persistence mechanism can be swapped
/// without touching callers.
pub struct Store {
    adapter: Box<dyn StorageAdapter>,
    corruption_policy: CorruptionPolicy,
}

impl Store {
    /// Create a store over the given adapter with the default `Fail` policy.
    ///
    /// No I/O happens here; call [`Store::init`] (or use [`Store::open`])
    /// before reading.
    pub fn new(adapter: Box<dyn StorageAdapter>) -> Self {
        Self {
            adapter,
            corruption_policy: CorruptionPolicy::Fail,
        }
    }

    /// Create a store with an explicit corruption policy.
    pub fn with_policy(adapter: Box<dyn StorageAdapter>, policy: CorruptionPolicy) -> Self {
        Self {
            adapter,
            corruption_policy: policy,
        }
    }

    /// Create a store and initialize it in one step.
    pub fn open(adapter: Box<dyn StorageAdapter>) -> Result<Self, StoreError> {
        let store = Self::new(adapter);
        store.init()?;
        Ok(store)
    }

    /// Write the seed document if nothing has been persisted yet.
    ///
    /// Idempotent: an existing document, even an old or corrupt one, is
    /// left untouched. Returns whether the seed was written. The
    /// check-then-write is not atomic across processes sharing the same
    /// key, but execution within one process is single-threaded and
    /// synchronous, so no race exists in one context.
    pub fn init(&self) -> Result<bool, StoreError> {
        if self.adapter.read()?.is_some() {
            return Ok(false);
        }
        self.persist(&SchoolDocument::seed())?;
        debug!("seed document written");
        Ok(true)
    }

    /// Deserialize the full current document.
    ///
    /// Reads always hit the adapter; there is no cache to go stale.
    fn load(&self) -> Result<SchoolDocument, StoreError> {
        let contents = match self.adapter.read()? {
            Some(contents) => contents,
            None => return self.recover(StoreError::Missing),
        };
        match serde_json::from_str::<SchoolDocument>(&contents) {
            Ok(doc) => {
                if doc.needs_migration() {
                    // Defaults already filled the gaps; the new version is
                    // stamped when the document is next written.
                    debug!(
                        old_version = doc.version,
                        new_version = SCHEMA_VERSION,
                        "document migrated on load"
                    );
                }
                Ok(doc)
            }
            Err(e) => self.recover(StoreError::Corrupted(e)),
        }
    }

    fn recover(&self, err: StoreError) -> Result<SchoolDocument, StoreError> {
        match self.corruption_policy {
            CorruptionPolicy::Fail => Err(err),
            CorruptionPolicy::Reseed => {
                warn!(error = %err, "document unreadable; reseeding");
                let doc = SchoolDocument::seed();
                self.persist(&doc)?;
                Ok(doc)
            }
        }
    }

    /// Serialize the whole document back to the adapter, stamping the
    /// current schema version.
    fn persist(&self, doc: &SchoolDocument) -> Result<(), StoreError> {
        let mut doc = doc.clone();
        doc.version = SCHEMA_VERSION;
        let contents = serde_json::to_string(&doc).map_err(StoreError::Serialize)?;
        self.adapter.write(&contents)?;
        Ok(())
    }

    /// Read-modify-write of the whole document.
    fn mutate<T>(
        &self,
        f: impl FnOnce(&mut SchoolDocument) -> T,
    ) -> Result<T, StoreError> {
        let mut doc = self.load()?;
        let out = f(&mut doc);
        self.persist(&doc)?;
        Ok(out)
    }

    /// Generate a new record id with the given type prefix.
    pub fn generate_id(&self, prefix: &str) -> String {
        generate_id(prefix)
    }

    // ========================================================================
    // Students
    // ========================================================================

    pub fn students(&self) -> Result<Vec<Student>, StoreError> {
        Ok(self.load()?.students)
    }

    /// Linear scan, first match.
    pub fn student_by_id(&self, id: &StudentId) -> Result<Option<Student>, StoreError> {
        Ok(self.load()?.students.into_iter().find(|s| &s.id == id))
    }

    pub fn student_by_admission_number(
        &self,
        admission_number: &str,
    ) -> Result<Option<Student>, StoreError> {
        Ok(self
            .load()?
            .students
            .into_iter()
            .find(|s| s.admission_number == admission_number))
    }

    /// All students in a class, insertion order preserved.
    pub fn students_by_class(&self, class_name: &str) -> Result<Vec<Student>, StoreError> {
        Ok(self
            .load()?
            .students
            .into_iter()
            .filter(|s| s.class_name == class_name)
            .collect())
    }

    /// Append a student. Admission-number uniqueness is the caller's
    /// responsibility (registration pre-checks it).
    #[instrument(skip(self, student), fields(student_id = %student.id))]
    pub fn add_student(&self, student: Student) -> Result<(), StoreError> {
        self.mutate(|doc| doc.students.push(student))
    }

    /// Shallow-merge an update over the student with the given id.
    ///
    /// A miss is a silent no-op: nothing is written and no error is
    /// signaled.
    #[instrument(skip(self, update), fields(student_id = %id))]
    pub fn update_student(
        &self,
        id: &StudentId,
        update: StudentUpdate,
    ) -> Result<(), StoreError> {
        let mut doc = self.load()?;
        match doc.students.iter_mut().find(|s| &s.id == id) {
            Some(student) => {
                update.apply_to(student);
                self.persist(&doc)
            }
            None => Ok(()),
        }
    }

    // ========================================================================
    // Teachers
    // ========================================================================

    pub fn teachers(&self) -> Result<Vec<Teacher>, StoreError> {
        Ok(self.load()?.teachers)
    }

    pub fn teacher_by_id(&self, id: &TeacherId) -> Result<Option<Teacher>, StoreError> {
        Ok(self.load()?.teachers.into_iter().find(|t| &t.id == id))
    }

    /// Email lookup is case-insensitive, matching the login forms.
    pub fn teacher_by_email(&self, email: &str) -> Result<Option<Teacher>, StoreError> {
        Ok(self
            .load()?
            .teachers
            .into_iter()
            .find(|t| t.email.eq_ignore_ascii_case(email)))
    }

    /// Append a teacher. Email uniqueness is the caller's responsibility.
    #[instrument(skip(self, teacher), fields(teacher_id = %teacher.id))]
    pub fn add_teacher(&self, teacher: Teacher) -> Result<(), StoreError> {
        self.mutate(|doc| doc.teachers.push(teacher))
    }

    /// Shallow-merge an update over the teacher with the given id; silent
    /// no-op on miss.
    #[instrument(skip(self, update), fields(teacher_id = %id))]
    pub fn update_teacher(
        &self,
        id: &TeacherId,
        update: TeacherUpdate,
    ) -> Result<(), StoreError> {
        let mut doc = self.load()?;
        match doc.teachers.iter_mut().find(|t| &t.id == id) {
            Some(teacher) => {
                update.apply_to(teacher);
                self.persist(&doc)
            }
            None => Ok(()),
        }
    }

    // ========================================================================
    // Parents
    // ========================================================================

    pub fn parents(&self) -> Result<Vec<Parent>, StoreError> {
        Ok(self.load()?.parents)
    }

    pub fn parent_by_id(&self, id: &ParentId) -> Result<Option<Parent>, StoreError> {
        Ok(self.load()?.parents.into_iter().find(|p| &p.id == id))
    }

    #[instrument(skip(self, parent), fields(parent_id = %parent.id))]
    pub fn add_parent(&self, parent: Parent) -> Result<(), StoreError> {
        self.mutate(|doc| doc.parents.push(parent))
    }

    // ========================================================================
    // Lesson notes
    // ========================================================================

    pub fn lesson_notes(&self) -> Result<Vec<LessonNote>, StoreError> {
        Ok(self.load()?.lesson_notes)
    }

    #[instrument(skip(self, note), fields(note_id = %note.id))]
    pub fn add_lesson_note(&self, note: LessonNote) -> Result<(), StoreError> {
        self.mutate(|doc| doc.lesson_notes.push(note))
    }

    pub fn lesson_notes_by_subject(&self, subject: &str) -> Result<Vec<LessonNote>, StoreError> {
        Ok(self
            .load()?
            .lesson_notes
            .into_iter()
            .filter(|n| n.subject == subject)
            .collect())
    }

    pub fn lesson_notes_by_class(&self, class_name: &str) -> Result<Vec<LessonNote>, StoreError> {
        Ok(self
            .load()?
            .lesson_notes
            .into_iter()
            .filter(|n| n.class_name == class_name)
            .collect())
    }

    // ========================================================================
    // Videos
    // ========================================================================

    pub fn videos(&self) -> Result<Vec<Video>, StoreError> {
        Ok(self.load()?.videos)
    }

    #[instrument(skip(self, video), fields(video_id = %video.id))]
    pub fn add_video(&self, video: Video) -> Result<(), StoreError> {
        self.mutate(|doc| doc.videos.push(video))
    }

    pub fn videos_by_subject(&self, subject: &str) -> Result<Vec<Video>, StoreError> {
        Ok(self
            .load()?
            .videos
            .into_iter()
            .filter(|v| v.subject == subject)
            .collect())
    }

    // ========================================================================
    // Assessments
    // ========================================================================

    pub fn assessments(&self) -> Result<Vec<Assessment>, StoreError> {
        Ok(self.load()?.assessments)
    }

    #[instrument(skip(self, assessment), fields(assessment_id = %assessment.id))]
    pub fn add_assessment(&self, assessment: Assessment) -> Result<(), StoreError> {
        self.mutate(|doc| doc.assessments.push(assessment))
    }

    pub fn assessments_by_class(&self, class_name: &str) -> Result<Vec<Assessment>, StoreError> {
        Ok(self
            .load()?
            .assessments
            .into_iter()
            .filter(|a| a.class_name == class_name)
            .collect())
    }

    // ========================================================================
    // Results
    // ========================================================================

    pub fn results(&self) -> Result<Vec<SubjectResult>, StoreError> {
        Ok(self.load()?.results)
    }

    #[instrument(skip(self, result), fields(result_id = %result.id))]
    pub fn add_result(&self, result: SubjectResult) -> Result<(), StoreError> {
        self.mutate(|doc| doc.results.push(result))
    }

    pub fn results_for_student(
        &self,
        student_id: &StudentId,
    ) -> Result<Vec<SubjectResult>, StoreError> {
        Ok(self
            .load()?
            .results
            .into_iter()
            .filter(|r| &r.student_id == student_id)
            .collect())
    }

    pub fn results_by_class(
        &self,
        class_name: &str,
        subject: &str,
        term: &str,
    ) -> Result<Vec<SubjectResult>, StoreError> {
        Ok(self
            .load()?
            .results
            .into_iter()
            .filter(|r| r.class_name == class_name && r.subject == subject && r.term == term)
            .collect())
    }

    // ========================================================================
    // Gallery
    // ========================================================================

    pub fn gallery(&self) -> Result<Vec<GalleryItem>, StoreError> {
        Ok(self.load()?.gallery)
    }

    #[instrument(skip(self, item), fields(item_id = %item.id))]
    pub fn add_gallery_item(&self, item: GalleryItem) -> Result<(), StoreError> {
        self.mutate(|doc| doc.gallery.push(item))
    }

    /// Remove a gallery item by position in the full (unfiltered)
    /// collection.
    ///
    /// The index must come from the same read snapshot that rendered it:
    /// deleting shifts every later index down by one, so an index captured
    /// from a stale or filtered view can remove the wrong item. Prefer
    /// [`Store::remove_gallery_item_by_id`]. An out-of-bounds index is a
    /// no-op; returns whether anything was removed.
    #[instrument(skip(self))]
    pub fn remove_gallery_item(&self, index: usize) -> Result<bool, StoreError> {
        self.mutate(|doc| {
            if index < doc.gallery.len() {
                doc.gallery.remove(index);
                true
            } else {
                false
            }
        })
    }

    /// Remove a gallery item by id; returns whether anything was removed.
    #[instrument(skip(self), fields(item_id = %id))]
    pub fn remove_gallery_item_by_id(&self, id: &GalleryItemId) -> Result<bool, StoreError> {
        self.mutate(|doc| {
            let before = doc.gallery.len();
            doc.gallery.retain(|item| &item.id != id);
            doc.gallery.len() != before
        })
    }

    // ========================================================================
    // Payments
    // ========================================================================

    pub fn payments(&self) -> Result<Vec<Payment>, StoreError> {
        Ok(self.load()?.payments)
    }

    #[instrument(skip(self, payment), fields(payment_id = %payment.id))]
    pub fn add_payment(&self, payment: Payment) -> Result<(), StoreError> {
        self.mutate(|doc| doc.payments.push(payment))
    }

    pub fn payments_for_student(
        &self,
        student_id: &StudentId,
    ) -> Result<Vec<Payment>, StoreError> {
        Ok(self
            .load()?
            .payments
            .into_iter()
            .filter(|p| &p.student_id == student_id)
            .collect())
    }

    /// Sum of all recorded payment amounts (admin overview figure).
    pub fn total_revenue(&self) -> Result<f64, StoreError> {
        Ok(self.load()?.payments.iter().map(|p| p.amount).sum())
    }

    // ========================================================================
    // Announcements
    // ========================================================================

    pub fn announcements(&self) -> Result<Vec<Announcement>, StoreError> {
        Ok(self.load()?.announcements)
    }

    #[instrument(skip(self, announcement), fields(announcement_id = %announcement.id))]
    pub fn add_announcement(&self, announcement: Announcement) -> Result<(), StoreError> {
        self.mutate(|doc| doc.announcements.push(announcement))
    }

    /// Remove an announcement by position in the full collection. Same
    /// same-snapshot caveat as [`Store::remove_gallery_item`].
    #[instrument(skip(self))]
    pub fn remove_announcement(&self, index: usize) -> Result<bool, StoreError> {
        self.mutate(|doc| {
            if index < doc.announcements.len() {
                doc.announcements.remove(index);
                true
            } else {
                false
            }
        })
    }

    /// Remove an announcement by id; returns whether anything was removed.
    #[instrument(skip(self), fields(announcement_id = %id))]
    pub fn remove_announcement_by_id(&self, id: &AnnouncementId) -> Result<bool, StoreError> {
        self.mutate(|doc| {
            let before = doc.announcements.len();
            doc.announcements.retain(|a| &a.id != id);
            doc.announcements.len() != before
        })
    }

    // ========================================================================
    // Settings
    // ========================================================================

    pub fn settings(&self) -> Result<Settings, StoreError> {
        Ok(self.load()?.settings)
    }

    /// Shallow-merge a partial update over the settings singleton.
    #[instrument(skip(self, update))]
    pub fn update_settings(&self, update: SettingsUpdate) -> Result<(), StoreError> {
        self.mutate(|doc| update.apply_to(&mut doc.settings))
    }

    pub fn current_session(&self) -> Result<String, StoreError> {
        Ok(self.load()?.settings.current_session)
    }

    pub fn current_term(&self) -> Result<String, StoreError> {
        Ok(self.load()?.settings.current_term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use slatebook_core::MemoryStorage;
    use slatebook_models::PaymentStatus;

    fn open_store() -> Store {
        Store::open(Box::new(MemoryStorage::new())).unwrap()
    }

    fn sample_gallery_item(title: &str) -> GalleryItem {
        GalleryItem {
            id: GalleryItemId::generate(),
            title: title.to_string(),
            category: "Sports".to_string(),
            url: format!("https://example.com/{}.jpg", title.to_lowercase()),
            description: None,
            date: Utc::now(),
        }
    }

    #[test]
    fn test_init_is_idempotent() {
        let store = Store::new(Box::new(MemoryStorage::new()));
        assert!(store.init().unwrap());
        assert!(!store.init().unwrap());
        assert_eq!(store.students().unwrap().len(), 1);
    }

    #[test]
    fn test_init_leaves_existing_document_untouched() {
        let store = open_store();
        store
            .add_announcement(Announcement::new("Holiday", "School closes Friday."))
            .unwrap();

        assert!(!store.init().unwrap());
        assert_eq!(store.announcements().unwrap().len(), 1);
    }

    #[test]
    fn test_read_after_write() {
        let store = open_store();
        store.add_gallery_item(sample_gallery_item("Sports Day")).unwrap();

        let gallery = store.gallery().unwrap();
        assert_eq!(gallery.len(), 1);
        assert_eq!(gallery[0].title, "Sports Day");
    }

    #[test]
    fn test_lookup_by_admission_number() {
        let store = open_store();
        let student = store
            .student_by_admission_number("AS2024001")
            .unwrap()
            .unwrap();
        assert_eq!(student.name, "John Doe");

        assert!(
            store
                .student_by_admission_number("AS9999999")
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_teacher_email_lookup_is_case_insensitive() {
        let store = open_store();
        let teacher = store
            .teacher_by_email("SARAH.JOHNSON@accuratestep.edu.ng")
            .unwrap();
        assert!(teacher.is_some());
    }

    #[test]
    fn test_update_student_merges_fields() {
        let store = open_store();
        let id = StudentId::from("STU001");
        store
            .update_student(
                &id,
                StudentUpdate {
                    attendance: Some(80),
                    ..Default::default()
                },
            )
            .unwrap();

        let student = store.student_by_id(&id).unwrap().unwrap();
        assert_eq!(student.attendance, 80);
        assert_eq!(student.name, "John Doe");
    }

    #[test]
    fn test_update_by_id_is_noop_on_miss() {
        let store = open_store();
        let before = store.students().unwrap();

        store
            .update_student(
                &StudentId::from("nonexistent-id"),
                StudentUpdate {
                    name: Some("Ghost".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(store.students().unwrap(), before);
    }

    #[test]
    fn test_delete_by_index_shifts_subsequent_indices() {
        let store = open_store();
        store.add_gallery_item(sample_gallery_item("First")).unwrap();
        store.add_gallery_item(sample_gallery_item("Second")).unwrap();
        store.add_gallery_item(sample_gallery_item("Third")).unwrap();

        assert!(store.remove_gallery_item(1).unwrap());

        let gallery = store.gallery().unwrap();
        assert_eq!(gallery.len(), 2);
        assert_eq!(gallery[0].title, "First");
        assert_eq!(gallery[1].title, "Third");
    }

    #[test]
    fn test_delete_out_of_bounds_is_noop() {
        let store = open_store();
        store.add_gallery_item(sample_gallery_item("Only")).unwrap();

        assert!(!store.remove_gallery_item(5).unwrap());
        assert_eq!(store.gallery().unwrap().len(), 1);
    }

    #[test]
    fn test_gallery_add_then_delete_returns_to_empty() {
        let store = open_store();
        store.add_gallery_item(sample_gallery_item("Sports Day")).unwrap();
        assert!(store.remove_gallery_item(0).unwrap());
        assert!(store.gallery().unwrap().is_empty());
    }

    #[test]
    fn test_remove_gallery_item_by_id() {
        let store = open_store();
        let item = sample_gallery_item("Cultural Day");
        let id = item.id.clone();
        store.add_gallery_item(item).unwrap();

        assert!(store.remove_gallery_item_by_id(&id).unwrap());
        assert!(!store.remove_gallery_item_by_id(&id).unwrap());
    }

    #[test]
    fn test_update_settings_preserves_other_fields() {
        let store = open_store();
        let before = store.settings().unwrap();

        store
            .update_settings(SettingsUpdate {
                current_term: Some("Second Term".to_string()),
                ..Default::default()
            })
            .unwrap();

        let after = store.settings().unwrap();
        assert_eq!(after.current_term, "Second Term");
        assert_eq!(after.current_session, before.current_session);
        assert_eq!(after.school_name, before.school_name);
        assert_eq!(after.bank_account, before.bank_account);
    }

    #[test]
    fn test_results_filtered_by_class_subject_term() {
        let store = open_store();
        let student_id = StudentId::from("STU001");
        for (subject, term) in [
            ("Mathematics", "First Term"),
            ("Mathematics", "Second Term"),
            ("English Language", "First Term"),
        ] {
            store
                .add_result(SubjectResult {
                    id: slatebook_models::ResultId::generate(),
                    student_id: student_id.clone(),
                    subject: subject.to_string(),
                    class_name: "JSS 1".to_string(),
                    term: term.to_string(),
                    ca: 30,
                    exam: 50,
                    total: 80,
                    grade: "A".to_string(),
                    remark: "Excellent".to_string(),
                })
                .unwrap();
        }

        let maths_first = store
            .results_by_class("JSS 1", "Mathematics", "First Term")
            .unwrap();
        assert_eq!(maths_first.len(), 1);

        let all_for_student = store.results_for_student(&student_id).unwrap();
        assert_eq!(all_for_student.len(), 3);
    }

    #[test]
    fn test_total_revenue_sums_payments() {
        let store = open_store();
        for amount in [45_000.0, 30_000.0] {
            store
                .add_payment(Payment {
                    id: slatebook_models::PaymentId::generate(),
                    student_id: StudentId::from("STU001"),
                    term: "First Term".to_string(),
                    amount,
                    reference: "FBN/2024/0001".to_string(),
                    status: PaymentStatus::Confirmed,
                    date: Utc::now(),
                })
                .unwrap();
        }
        assert_eq!(store.total_revenue().unwrap(), 75_000.0);
    }

    #[test]
    fn test_corrupted_document_fails_by_default() {
        let store = Store::new(Box::new(MemoryStorage::with_contents("not json{{")));
        match store.students() {
            Err(StoreError::Corrupted(_)) => {}
            other => panic!("expected Corrupted, got {:?}", other.map(|v| v.len())),
        }
    }

    #[test]
    fn test_corrupted_document_reseeds_under_reseed_policy() {
        let store = Store::with_policy(
            Box::new(MemoryStorage::with_contents("not json{{")),
            CorruptionPolicy::Reseed,
        );
        assert_eq!(store.students().unwrap().len(), 1);
    }

    #[test]
    fn test_missing_document_fails_without_init() {
        let store = Store::new(Box::new(MemoryStorage::new()));
        assert!(matches!(store.settings(), Err(StoreError::Missing)));
    }

    #[test]
    fn test_old_document_migrates_on_next_write() {
        // Version-0 blob lacking most collections.
        let old = r#"{
            "students": [],
            "teachers": [],
            "parents": [],
            "settings": {
                "schoolName": "Accurate Step International School",
                "address": "Abuja",
                "phone": "+234",
                "email": "info@accuratestepschool.edu.ng",
                "currentSession": "2023/2024",
                "currentTerm": "Third Term",
                "bankAccount": {
                    "bankName": "First Bank of Nigeria",
                    "accountNumber": "1234567890",
                    "accountName": "Accurate Step International School"
                }
            }
        }"#;
        let adapter = MemoryStorage::with_contents(old);
        let store = Store::new(Box::new(adapter));

        // Reads see empty defaults for the missing collections.
        assert!(store.gallery().unwrap().is_empty());

        // Any write stamps the current schema version.
        store
            .add_announcement(Announcement::new("Note", "Migrated."))
            .unwrap();
        let raw = store.adapter.read().unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], SCHEMA_VERSION);
        assert!(value.get("gallery").is_some());
    }
}
