// src/pipeline.rs
use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use smallvec::SmallVec;
use std::borrow::Cow;
use std::sync::Arc;

/// The full normalization sequence is nine stages; the list stays inline.
pub type Stages = SmallVec<[Arc<dyn Stage>; 9]>;

/// Ordered stage list threading a `Cow` through each step. Stages whose
/// `needs_apply` says no are skipped entirely, so clean input crosses the
/// whole pipeline borrowed.
pub struct Pipeline {
    stages: Stages,
}

impl Pipeline {
    pub fn new(stages: Stages) -> Self {
        Self { stages }
    }

    pub fn process<'a>(
        &self,
        text: Cow<'a, str>,
        ctx: &Context,
    ) -> Result<Cow<'a, str>, StageError> {
        let mut current = text;

        for stage in &self.stages {
            if !stage.needs_apply(&current, ctx)? {
                continue;
            }
            current = stage.apply(current, ctx)?;
        }

        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::{clean::Clean, separators::WithSeparators};

    fn two_stage_pipeline() -> Pipeline {
        let mut stages = Stages::new();
        stages.push(Arc::new(Clean));
        stages.push(Arc::new(WithSeparators { separator: '-' }));
        Pipeline::new(stages)
    }

    #[test]
    fn stages_run_in_order() {
        let pipeline = two_stage_pipeline();
        let out = pipeline
            .process(Cow::Borrowed("  a   b  "), &Context::default())
            .unwrap();
        assert_eq!(out, "a-b");
    }

    struct RejectLong {
        limit: usize,
    }

    impl Stage for RejectLong {
        fn name(&self) -> &'static str {
            "reject_long"
        }

        fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
            Ok(text.len() > self.limit)
        }

        fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
            Err(StageError::Failed(
                self.name(),
                format!("input exceeds {} bytes: {}", self.limit, text.len()),
            ))
        }
    }

    #[test]
    fn failing_stage_stops_the_pipeline() {
        let mut stages = Stages::new();
        stages.push(Arc::new(RejectLong { limit: 4 }));
        stages.push(Arc::new(Clean));
        let pipeline = Pipeline::new(stages);

        let err = pipeline
            .process(Cow::Borrowed("too long"), &Context::default())
            .unwrap_err();
        assert!(matches!(err, StageError::Failed("reject_long", _)));

        // Below the limit the stage is skipped and the rest still runs.
        let out = pipeline
            .process(Cow::Borrowed("a  b"), &Context::default())
            .unwrap();
        assert_eq!(out, "a b");
    }

    #[test]
    fn clean_input_stays_borrowed() {
        let pipeline = two_stage_pipeline();
        let input = "alreadyclean";
        let out = pipeline
            .process(Cow::Borrowed(input), &Context::default())
            .unwrap();
        assert!(matches!(out, Cow::Borrowed(s) if std::ptr::eq(s, input)));
    }
}
