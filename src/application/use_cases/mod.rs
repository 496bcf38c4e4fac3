/// Use cases orchestrating the BOM analysis services
mod analyze_bom;

pub use analyze_bom::AnalyzeBomUseCase;
