use transfer_check::prelude::*;

#[test]
fn prelude_exports_expected_items() {
    let _ = Mode::Copy;
    let _ = Violation::TargetMissing;
    let _ = Outcome::Unevaluated;
    let _err = TransferCheckError::EmptyAction;
    let _probe: &dyn ExistenceProbe = &LocalFs;

    let _move_fn: fn(std::path::PathBuf, TransferOptions) -> Expectation = move_file;
    let _copy_fn: fn(std::path::PathBuf, TransferOptions) -> TCResult<Expectation> = copy_file;
    let _delete_fn: fn(std::path::PathBuf) -> Expectation = delete_file;
}
