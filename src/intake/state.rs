use serde::{Deserialize, Serialize};

/// The four sequential screens of the intake form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum WizardStep {
    PersonalInfo,
    Housing,
    Lifestyle,
    Extras,
}

impl Default for WizardStep {
    fn default() -> Self {
        Self::PersonalInfo
    }
}

impl WizardStep {
    pub const FIRST: WizardStep = WizardStep::PersonalInfo;
    pub const LAST: WizardStep = WizardStep::Extras;

    /// 1-based position, for the progress strip.
    pub fn number(self) -> u8 {
        match self {
            WizardStep::PersonalInfo => 1,
            WizardStep::Housing => 2,
            WizardStep::Lifestyle => 3,
            WizardStep::Extras => 4,
        }
    }

    /// Next step; saturates at the last one.
    pub fn next(self) -> Self {
        match self {
            WizardStep::PersonalInfo => WizardStep::Housing,
            WizardStep::Housing => WizardStep::Lifestyle,
            WizardStep::Lifestyle => WizardStep::Extras,
            WizardStep::Extras => WizardStep::Extras,
        }
    }

    /// Previous step; saturates at the first one.
    pub fn previous(self) -> Self {
        match self {
            WizardStep::PersonalInfo => WizardStep::PersonalInfo,
            WizardStep::Housing => WizardStep::PersonalInfo,
            WizardStep::Lifestyle => WizardStep::Housing,
            WizardStep::Extras => WizardStep::Lifestyle,
        }
    }

    pub fn is_first(self) -> bool {
        self == Self::FIRST
    }

    pub fn is_last(self) -> bool {
        self == Self::LAST
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::PersonalInfo => "Personal & Academic Information",
            WizardStep::Housing => "Accommodation Preferences",
            WizardStep::Lifestyle => "Lifestyle & Study Preferences",
            WizardStep::Extras => "Additional Information",
        }
    }
}

/// Every key of the answer record. Inputs address fields through this enum so
/// a mutation can only ever touch one known key.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Field {
    // Personal & academic
    Name,
    Age,
    Gender,
    Occupation,
    Phone,
    Email,
    StudentId,
    Faculty,
    Religion,
    Department,
    Level,
    // Housing
    Budget,
    MoveInDate,
    LeaseDuration,
    PreferredLocation,
    RoomType,
    // Lifestyle
    SleepSchedule,
    Cleanliness,
    SocialLevel,
    SmokingPolicy,
    DrinkingPolicy,
    PetPolicy,
    GuestPolicy,
    // Free text
    Hobbies,
    DealBreakers,
    AdditionalNotes,
    // Picture
    ProfileImage,
}

impl Field {
    pub const ALL: [Field; 27] = [
        Field::Name,
        Field::Age,
        Field::Gender,
        Field::Occupation,
        Field::Phone,
        Field::Email,
        Field::StudentId,
        Field::Faculty,
        Field::Religion,
        Field::Department,
        Field::Level,
        Field::Budget,
        Field::MoveInDate,
        Field::LeaseDuration,
        Field::PreferredLocation,
        Field::RoomType,
        Field::SleepSchedule,
        Field::Cleanliness,
        Field::SocialLevel,
        Field::SmokingPolicy,
        Field::DrinkingPolicy,
        Field::PetPolicy,
        Field::GuestPolicy,
        Field::Hobbies,
        Field::DealBreakers,
        Field::AdditionalNotes,
        Field::ProfileImage,
    ];

    /// The record key as it appears in the submitted mapping.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Age => "age",
            Field::Gender => "gender",
            Field::Occupation => "occupation",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::StudentId => "studentId",
            Field::Faculty => "faculty",
            Field::Religion => "religion",
            Field::Department => "department",
            Field::Level => "level",
            Field::Budget => "budget",
            Field::MoveInDate => "moveInDate",
            Field::LeaseDuration => "leaseDuration",
            Field::PreferredLocation => "preferredLocation",
            Field::RoomType => "roomType",
            Field::SleepSchedule => "sleepSchedule",
            Field::Cleanliness => "cleanliness",
            Field::SocialLevel => "socialLevel",
            Field::SmokingPolicy => "smokingPolicy",
            Field::DrinkingPolicy => "drinkingPolicy",
            Field::PetPolicy => "petPolicy",
            Field::GuestPolicy => "guestPolicy",
            Field::Hobbies => "hobbies",
            Field::DealBreakers => "dealBreakers",
            Field::AdditionalNotes => "additionalNotes",
            Field::ProfileImage => "profileImage",
        }
    }
}

/// Required fields per step. The final step has none.
pub fn required_fields(step: WizardStep) -> &'static [Field] {
    match step {
        WizardStep::PersonalInfo => &[
            Field::Name,
            Field::Age,
            Field::Department,
            Field::Level,
            Field::Religion,
            Field::Gender,
            Field::Phone,
            Field::Email,
        ],
        WizardStep::Housing => &[
            Field::Budget,
            Field::MoveInDate,
            Field::LeaseDuration,
            Field::PreferredLocation,
            Field::RoomType,
        ],
        WizardStep::Lifestyle => &[
            Field::SleepSchedule,
            Field::Cleanliness,
            Field::SocialLevel,
            Field::SmokingPolicy,
            Field::DrinkingPolicy,
            Field::GuestPolicy,
        ],
        WizardStep::Extras => &[],
    }
}

/// Select inputs store a normalized token of the chosen label: lower-cased,
/// runs of whitespace collapsed to single hyphens. The empty option stays "".
pub fn select_token(label: &str) -> String {
    label
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// The complete set of answers. Every value is text, defaulting to empty;
/// dates and numbers stay unparsed until a downstream consumer wants them.
///
/// `occupation`, `student_id`, `faculty` and `pet_policy` are carried in the
/// record but not surfaced by any step, so the submitted mapping keeps its
/// full key set for downstream consumers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnswerRecord {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub occupation: String,
    pub phone: String,
    pub email: String,
    pub student_id: String,
    pub faculty: String,
    pub religion: String,
    pub department: String,
    pub level: String,
    pub budget: String,
    pub move_in_date: String,
    pub lease_duration: String,
    pub preferred_location: String,
    pub room_type: String,
    pub sleep_schedule: String,
    pub cleanliness: String,
    pub social_level: String,
    pub smoking_policy: String,
    pub drinking_policy: String,
    pub pet_policy: String,
    pub guest_policy: String,
    pub hobbies: String,
    pub deal_breakers: String,
    pub additional_notes: String,
    pub profile_image: String,
}

impl AnswerRecord {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Age => &self.age,
            Field::Gender => &self.gender,
            Field::Occupation => &self.occupation,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::StudentId => &self.student_id,
            Field::Faculty => &self.faculty,
            Field::Religion => &self.religion,
            Field::Department => &self.department,
            Field::Level => &self.level,
            Field::Budget => &self.budget,
            Field::MoveInDate => &self.move_in_date,
            Field::LeaseDuration => &self.lease_duration,
            Field::PreferredLocation => &self.preferred_location,
            Field::RoomType => &self.room_type,
            Field::SleepSchedule => &self.sleep_schedule,
            Field::Cleanliness => &self.cleanliness,
            Field::SocialLevel => &self.social_level,
            Field::SmokingPolicy => &self.smoking_policy,
            Field::DrinkingPolicy => &self.drinking_policy,
            Field::PetPolicy => &self.pet_policy,
            Field::GuestPolicy => &self.guest_policy,
            Field::Hobbies => &self.hobbies,
            Field::DealBreakers => &self.deal_breakers,
            Field::AdditionalNotes => &self.additional_notes,
            Field::ProfileImage => &self.profile_image,
        }
    }

    /// Replace exactly one field, leaving every other key untouched.
    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Age => &mut self.age,
            Field::Gender => &mut self.gender,
            Field::Occupation => &mut self.occupation,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::StudentId => &mut self.student_id,
            Field::Faculty => &mut self.faculty,
            Field::Religion => &mut self.religion,
            Field::Department => &mut self.department,
            Field::Level => &mut self.level,
            Field::Budget => &mut self.budget,
            Field::MoveInDate => &mut self.move_in_date,
            Field::LeaseDuration => &mut self.lease_duration,
            Field::PreferredLocation => &mut self.preferred_location,
            Field::RoomType => &mut self.room_type,
            Field::SleepSchedule => &mut self.sleep_schedule,
            Field::Cleanliness => &mut self.cleanliness,
            Field::SocialLevel => &mut self.social_level,
            Field::SmokingPolicy => &mut self.smoking_policy,
            Field::DrinkingPolicy => &mut self.drinking_policy,
            Field::PetPolicy => &mut self.pet_policy,
            Field::GuestPolicy => &mut self.guest_policy,
            Field::Hobbies => &mut self.hobbies,
            Field::DealBreakers => &mut self.deal_breakers,
            Field::AdditionalNotes => &mut self.additional_notes,
            Field::ProfileImage => &mut self.profile_image,
        };
        *slot = value;
    }
}

/// Wizard position plus the record, as read by the UI each frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormState {
    pub current_step: WizardStep,
    pub record: AnswerRecord,

    // Workflow control, recomputed after every action
    pub can_proceed: bool,
    pub can_go_back: bool,

    // Transient message for a rejected action
    pub error: Option<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_step_valid(&self, step: WizardStep) -> bool {
        required_fields(step)
            .iter()
            .all(|field| !self.record.get(*field).is_empty())
    }

    pub fn can_advance_from_current_step(&self) -> bool {
        self.is_step_valid(self.current_step)
    }

    pub fn can_go_back_from_current_step(&self) -> bool {
        !self.current_step.is_first()
    }
}
