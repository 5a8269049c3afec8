use super::{calculate, FpaCalculations};
use crate::core::{ComponentDetail, ProjectConfig};
use crate::i18n::Translate;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoStats {
    pub hits: usize,
    pub misses: usize,
}

struct Memo {
    components: Vec<ComponentDetail>,
    config: ProjectConfig,
    result: Arc<FpaCalculations>,
}

/// Recomputes only when the inputs change.
///
/// Keeps the last `(components, config)` pair and compares new inputs by deep
/// equality. The translator is fixed for the lifetime of the calculator, so a
/// language switch means building a new one.
pub struct MemoizedCalculator<'t> {
    translate: Option<&'t dyn Translate>,
    last: Option<Memo>,
    stats: MemoStats,
}

impl Default for MemoizedCalculator<'_> {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<'t> MemoizedCalculator<'t> {
    pub fn new(translate: Option<&'t dyn Translate>) -> Self {
        Self {
            translate,
            last: None,
            stats: MemoStats::default(),
        }
    }

    pub fn calculate(
        &mut self,
        components: &[ComponentDetail],
        config: &ProjectConfig,
    ) -> Arc<FpaCalculations> {
        if let Some(memo) = &self.last {
            if memo.components == components && memo.config == *config {
                self.stats.hits += 1;
                return Arc::clone(&memo.result);
            }
        }

        self.stats.misses += 1;
        let result = Arc::new(calculate(components, config, self.translate));
        self.last = Some(Memo {
            components: components.to_vec(),
            config: config.clone(),
            result: Arc::clone(&result),
        });
        result
    }

    pub fn stats(&self) -> MemoStats {
        self.stats
    }

    pub fn clear(&mut self) {
        self.last = None;
    }
}
