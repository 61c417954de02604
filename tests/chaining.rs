use std::io;

use errctx::{with_context, BoxError, ContextError, ResultExt};

#[test]
fn test_wrapping_existing_context_returns_the_same_allocation() {
    let err = with_context(
        Box::new(io::Error::new(
            io::ErrorKind::ConnectionRefused,
            "connection refused",
        )),
        "dialing db",
    );
    let before = &*err as *const ContextError;

    let err = with_context(err, "loading profile");

    assert_eq!(before, &*err as *const ContextError);
    assert_eq!(
        err.to_string(),
        "loading profile: dialing db: connection refused",
    );
}

#[test]
fn test_later_appends_extend_the_same_chain() {
    let mut err = with_context(
        Box::new(io::Error::new(io::ErrorKind::BrokenPipe, "boom")),
        "step one",
    );
    err.add_context("step two");
    let err = with_context(err, "step three");
    assert_eq!(err.to_string(), "step three: step two: step one: boom");
}

fn do_x() -> Result<(), BoxError> {
    Err(ContextError::new("could not do X: bad stuff happened").into())
}

fn do_y() -> Result<(), BoxError> {
    do_x().context("could not do Y")
}

#[test]
fn test_context_chain_across_call_layers() {
    let err = do_y().unwrap_err();
    assert_eq!(
        err.to_string(),
        "could not do Y: could not do X: bad stuff happened",
    );
}

#[test]
fn test_context_keeps_appending_instead_of_nesting() {
    let err: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "no such table"));
    let err = err
        .context("querying accounts")
        .context("rendering dashboard")
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "rendering dashboard: querying accounts: no such table",
    );

    // The root is still the io::Error, not a wrapper of a wrapper.
    let root = errctx::root(err.as_ref());
    assert!(root.downcast_ref::<io::Error>().is_some());
}

#[test]
fn test_with_context_closure_runs_only_on_the_error_path() {
    let mut called = false;
    let ok: Result<u32, io::Error> = Ok(7);
    let got = ok.with_context(|| {
        called = true;
        "ignored"
    });
    assert_eq!(got.unwrap(), 7);
    assert!(!called);

    let err: Result<(), io::Error> =
        Err(io::Error::new(io::ErrorKind::InvalidData, "truncated record"));
    let err = err
        .with_context(|| format!("decoding segment {}", 12))
        .unwrap_err();
    assert_eq!(err.to_string(), "decoding segment 12: truncated record");
}
