pub mod curriculum;
pub mod loader;

pub use curriculum::KoreanCurriculum;
pub use loader::CurriculumLoader;
