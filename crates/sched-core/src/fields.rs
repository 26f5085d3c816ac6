//! Canonical field names for every source dataset.
//!
//! These are the names records carry after normalization. Raw exports spell
//! them in many ways (`course_code`, `Course code`, `lecture Code`); the
//! normalizer in `sched-source` maps every accepted spelling onto the
//! constants below, so nothing downstream ever sees a raw name.

/// Fields of `course_list.json`.
pub mod course_list {
    pub const COURSE_ID: &str = "Course ID";
    pub const COURSE_CODE: &str = "Course Code";
    pub const COURSE_TITLE: &str = "Course Title";
    pub const LENGTH: &str = "Length";
    pub const CREDITS: &str = "Credits";
    pub const DEPARTMENTS: &str = "Department(s)";
    pub const PRIORITY: &str = "Priority";
    /// Comma-separated block list, or a JSON array of blocks.
    pub const AVAILABLE_BLOCKS: &str = "Available blocks";
    pub const UNAVAILABLE_BLOCKS: &str = "Unavailable blocks";
    pub const MINIMUM_SECTION_SIZE: &str = "Minimum section size";
    pub const TARGET_SECTION_SIZE: &str = "Target section size";
    pub const MAXIMUM_SECTION_SIZE: &str = "Maximum section size";
    pub const NUMBER_OF_SECTIONS: &str = "Number of sections";
    pub const TOTAL_CREDITS: &str = "Total credits";
}

/// Fields of `rooms_data.json`.
pub mod rooms_data {
    pub const COURSE_ID: &str = "Course ID";
    pub const ROOM_NUMBER: &str = "Room Number";
    pub const SECTION_NUMBER: &str = "Section Number";
    pub const COURSE_CODE: &str = "Course Code";
    pub const START_TERM: &str = "Start Term";
    pub const YEAR: &str = "Year";
    pub const TERM_DESCRIPTION: &str = "Term Description";
    pub const TERM_NAME: &str = "Term name";
}

/// Fields of `lecturer_details.json`.
pub mod lecturer_details {
    pub const PROF_ID: &str = "Prof ID";
    pub const COURSE_CODE: &str = "Course Code";
    pub const COURSE_TITLE: &str = "Course Title";
    pub const SECTION_NUMBER: &str = "Section Number";
    pub const LENGTH: &str = "Length";
    pub const START_TERM: &str = "Start Term";
}

/// Fields of `student_requests.json`.
pub mod student_requests {
    pub const STUDENT_ID: &str = "Student ID";
    pub const COURSE_ID: &str = "Course ID";
    pub const COURSE_CODE: &str = "Course Code";
    pub const COURSE_TITLE: &str = "Course Title";
    pub const TYPE: &str = "Type";
    pub const PRIORITY: &str = "Priority";
    pub const REQUEST_START_TERM: &str = "Request start term";
    pub const LENGTH: &str = "Length";
    pub const COLLEGE_YEAR: &str = "College Year";
}
