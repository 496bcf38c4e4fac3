use crate::application::dto::{
    AnalysisKind, AnalysisMetadata, AnalysisReport, AnalysisRequest, AnalysisResponse,
    ExpansionLine, ProductValidation,
};
use crate::application::store::BomStore;
use crate::bom_analysis::domain::{BomRepository, Item, ItemId};
use crate::bom_analysis::services::{BomValidator, MultiLevelExpander, RequirementCalculator};
use crate::ports::outbound::{BomSource, ProgressReporter};
use crate::shared::error::BomError;
use crate::shared::Result;

/// AnalyzeBomUseCase - loads the BOM snapshot and runs one analysis on it
///
/// Infrastructure is injected through generics, like every use case here.
///
/// # Type Parameters
/// * `S` - BomSource implementation feeding the store
/// * `PR` - ProgressReporter implementation
pub struct AnalyzeBomUseCase<S, PR> {
    store: BomStore<S>,
    progress_reporter: PR,
    validator: BomValidator,
}

impl<S, PR> AnalyzeBomUseCase<S, PR>
where
    S: BomSource,
    PR: ProgressReporter,
{
    pub fn new(store: BomStore<S>, progress_reporter: PR, validator: BomValidator) -> Self {
        Self {
            store,
            progress_reporter,
            validator,
        }
    }

    pub fn store(&self) -> &BomStore<S> {
        &self.store
    }

    /// Executes the analysis described by `request`
    ///
    /// # Errors
    /// Returns an error if the source fails and no earlier snapshot is
    /// available, or if the request carries an unusable production quantity.
    pub async fn execute(&mut self, request: AnalysisRequest) -> Result<AnalysisResponse> {
        // Step 1: Load (or refresh) the snapshot
        self.load().await?;

        // Step 2: Run the requested analysis
        let repository = self.store.repository();
        let report = match request.kind {
            AnalysisKind::Validate { product } => self.validate(repository, product),
            AnalysisKind::Expand { product, quantity } => {
                ensure_quantity(quantity)?;
                let lines = MultiLevelExpander::explode(repository, product, quantity)
                    .into_iter()
                    .map(ExpansionLine::from)
                    .collect();
                AnalysisReport::Expansion {
                    product: lookup(repository, product),
                    production_quantity: quantity,
                    lines,
                }
            }
            AnalysisKind::Requirements {
                product,
                quantity,
                multi_level,
            } => {
                ensure_quantity(quantity)?;
                let requirements = if multi_level {
                    RequirementCalculator::multi_level_requirements(repository, product, quantity)
                } else {
                    RequirementCalculator::requirements(repository, product, quantity)
                };
                AnalysisReport::Requirements {
                    product: lookup(repository, product),
                    production_quantity: quantity,
                    multi_level,
                    requirements,
                }
            }
            AnalysisKind::WhereUsed { component } => AnalysisReport::WhereUsed {
                component: lookup(repository, component),
                usages: repository
                    .edges_for_component(component)
                    .into_iter()
                    .cloned()
                    .collect(),
            },
            AnalysisKind::Catalog => AnalysisReport::Catalog {
                products: repository.unique_products().into_iter().cloned().collect(),
                components: repository.unique_components().into_iter().cloned().collect(),
                operations: repository
                    .operations()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            },
        };

        // Step 3: Attach provenance
        let metadata = AnalysisMetadata::new(self.store.source().describe(), repository.len());
        Ok(AnalysisResponse::new(metadata, report))
    }

    /// Fetches through the store, falling back to a stale snapshot when one exists
    async fn load(&mut self) -> Result<()> {
        self.progress_reporter.report(&format!(
            "📖 Loading BOM data from: {}",
            self.store.source().describe()
        ));

        if self.store.fetch().await {
            self.progress_reporter.report(&format!(
                "✅ Loaded {} BOM edge(s)",
                self.store.repository().len()
            ));
            return Ok(());
        }

        let details = self.store.error().unwrap_or("unknown error").to_string();
        if self.store.has_loaded() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: {}. Using the previously loaded snapshot.",
                details
            ));
            return Ok(());
        }

        // Adapter errors already carry the right hint; anything else is
        // reported as an unavailable source
        match self.store.take_failure() {
            Some(failure) if failure.is::<BomError>() => Err(failure),
            _ => Err(BomError::SourceUnavailable {
                source_name: self.store.source().describe(),
                details,
            }
            .into()),
        }
    }

    fn validate(&self, repository: &BomRepository, product: Option<ItemId>) -> AnalysisReport {
        let results = match product {
            Some(product) => vec![ProductValidation {
                product: lookup(repository, product),
                report: self.validator.validate(repository, product),
            }],
            None => {
                let products = repository.unique_products();
                let total = products.len();
                let mut results = Vec::with_capacity(total);
                for (index, item) in products.into_iter().enumerate() {
                    results.push(ProductValidation {
                        product: item.clone(),
                        report: self.validator.validate(repository, item.id()),
                    });
                    self.progress_reporter.report_progress(
                        index + 1,
                        total,
                        Some(&item.display_name()),
                    );
                }
                results
            }
        };

        let invalid = results.iter().filter(|r| !r.report.is_valid()).count();
        if invalid == 0 {
            self.progress_reporter
                .report_completion(&format!("✅ {} product(s) validated, no issues found", results.len()));
        } else {
            self.progress_reporter.report_completion(&format!(
                "❌ {} of {} product(s) have BOM issues",
                invalid,
                results.len()
            ));
        }

        AnalysisReport::Validation { results }
    }
}

/// Known entity for `id`, or an unnamed placeholder
fn lookup(repository: &BomRepository, id: ItemId) -> Item {
    repository
        .item(id)
        .cloned()
        .unwrap_or_else(|| Item::unnamed(id))
}

fn ensure_quantity(quantity: f64) -> Result<()> {
    if !quantity.is_finite() || quantity <= 0.0 {
        return Err(BomError::Validation {
            message: format!("production quantity must be a positive number, got {}", quantity),
        }
        .into());
    }
    Ok(())
}
