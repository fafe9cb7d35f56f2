mod project_name;
mod tempo;
mod time_signature;
mod track_type;

pub use project_name::ProjectName;
pub use tempo::Tempo;
pub use time_signature::TimeSignature;
pub use track_type::TrackType;
