use async_trait::async_trait;
use bom_graph::prelude::*;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Mock BomSource replaying a script of fetch outcomes.
///
/// Each fetch pops the next outcome; the last one repeats once the script is
/// exhausted.
#[derive(Clone)]
pub struct MockBomSource {
    script: Arc<Mutex<VecDeque<Option<Vec<BomEdge>>>>>,
    last: Arc<Mutex<Option<Vec<BomEdge>>>>,
    pub fetch_count: Arc<Mutex<usize>>,
}

impl MockBomSource {
    pub fn new(edges: Vec<BomEdge>) -> Self {
        Self::scripted(vec![Some(edges)])
    }

    pub fn with_failure() -> Self {
        Self::scripted(vec![None])
    }

    /// `Some(edges)` succeeds with those edges, `None` fails
    pub fn scripted(outcomes: Vec<Option<Vec<BomEdge>>>) -> Self {
        Self {
            script: Arc::new(Mutex::new(outcomes.into())),
            last: Arc::new(Mutex::new(None)),
            fetch_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn fetches(&self) -> usize {
        *self.fetch_count.lock().unwrap()
    }
}

#[async_trait]
impl BomSource for MockBomSource {
    async fn fetch_edges(&self) -> Result<Vec<BomEdge>> {
        *self.fetch_count.lock().unwrap() += 1;

        let mut last = self.last.lock().unwrap();
        if let Some(next) = self.script.lock().unwrap().pop_front() {
            *last = next;
        }

        match last.as_ref() {
            Some(edges) => Ok(edges.clone()),
            None => anyhow::bail!("Mock BOM source failure: connection refused"),
        }
    }

    fn describe(&self) -> String {
        "mock://billofmaterials".to_string()
    }
}
