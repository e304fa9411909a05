use crate::stage::Stage;

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// General test samples (may or may not trigger changes).
    fn samples() -> &'static [&'static str] {
        &["Hello World 123", " déjà-vu ", "TEST", ""]
    }

    /// Samples that must pass through unchanged, zero-copy.
    fn should_pass_through() -> &'static [&'static str];

    /// Input/output pairs that verify concrete transformations.
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[]
    }
}

/// Assert that a stage satisfies the universal contracts:
///
/// 1. `zero_copy_when_no_changes` — no allocation when input == output
/// 2. `stage_is_idempotent` — applying twice equals applying once
/// 3. `needs_apply_is_accurate` — predicts exactly whether `apply` changes text
/// 4. `no_panic_on_mixed_scripts` — survives pathological real-world input
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes($stage);
        $crate::testing::stage_contract::stage_is_idempotent($stage);
        $crate::testing::stage_contract::needs_apply_is_accurate($stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts($stage);
    };
}

#[cfg(test)]
use crate::context::Context;
#[cfg(test)]
use std::borrow::Cow;

#[cfg(test)]
pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: S) {
    let ctx = Context::default();

    for &input in S::should_pass_through() {
        assert!(
            !stage.needs_apply(input, &ctx).unwrap(),
            "needs_apply() claims a change on pass-through sample `{input}`"
        );
        let out = stage.apply(Cow::Borrowed(input), &ctx).unwrap();
        assert!(
            matches!(out, Cow::Borrowed(s) if std::ptr::eq(s, input)),
            "zero-copy violated on pass-through sample `{input}`"
        );
    }

    for &(input, expected) in S::should_transform() {
        let out = stage.apply(Cow::Borrowed(input), &ctx).unwrap();
        assert_eq!(out, expected, "wrong transform for `{input}`");
    }
}

#[cfg(test)]
pub fn stage_is_idempotent<S: StageTestConfig>(stage: S) {
    let ctx = Context::default();
    for &input in S::samples() {
        let once = stage.apply(Cow::Borrowed(input), &ctx).unwrap();
        let twice = stage.apply(once.clone(), &ctx).unwrap();
        assert_eq!(once, twice, "apply() not idempotent on `{input}`");
    }
}

#[cfg(test)]
pub fn needs_apply_is_accurate<S: StageTestConfig>(stage: S) {
    let ctx = Context::default();
    let transforms = S::should_transform().iter().map(|&(input, _)| input);
    for input in S::samples().iter().copied().chain(transforms) {
        let predicted = stage.needs_apply(input, &ctx).unwrap();
        // Owned input so stages that always reallocate are not penalised.
        let output = stage.apply(Cow::Owned(input.to_owned()), &ctx).unwrap();
        let changed = output != input;
        assert_eq!(
            predicted,
            changed,
            "needs_apply() mismatch for stage `{}` on `{input}` (output = {output:?})",
            stage.name(),
        );
    }
}

#[cfg(test)]
pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: S) {
    let ctx = Context::default();
    let _ = stage.apply(
        Cow::Borrowed("Hello 世界 русский Türkçe العربية 简体中文 \u{0301}\u{FFFD}"),
        &ctx,
    );
}
