//! Validation pipeline runner.
//!
//! A pipeline is an ordered slice of pure checks over the incoming payload
//! and the per-request route context. Checks run in order and the first
//! failure terminates the run, so no repository mutation can happen until
//! every check has passed.

use platter_types::ApiError;

/// A single validation check.
pub type Check<P, T> = fn(&P, &RouteContext<T>) -> Result<(), ApiError>;

/// Per-request context the checks read.
///
/// The record lookup happens before the pipeline runs, so checks stay pure;
/// the existence check only inspects what the lookup bound here.
#[derive(Debug)]
pub struct RouteContext<T> {
	/// Id taken from the route, absent for create requests.
	pub route_id: Option<String>,
	/// The stored record the route id resolved to, if any.
	pub existing: Option<T>,
}

impl<T> RouteContext<T> {
	/// Context for a create request: no route id, no existing record.
	pub fn for_create() -> Self {
		Self {
			route_id: None,
			existing: None,
		}
	}

	/// Context for a request addressing a specific record.
	pub fn for_route(route_id: impl Into<String>, existing: Option<T>) -> Self {
		Self {
			route_id: Some(route_id.into()),
			existing,
		}
	}

	/// The route id, or "" when absent. Create pipelines never read it.
	pub fn route_id(&self) -> &str {
		self.route_id.as_deref().unwrap_or_default()
	}
}

/// Runs every check in order, halting on the first failure.
pub fn run<P, T>(
	payload: &P,
	ctx: &RouteContext<T>,
	checks: &[Check<P, T>],
) -> Result<(), ApiError> {
	for check in checks {
		check(payload, ctx)?;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn pass(_: &u32, _: &RouteContext<()>) -> Result<(), ApiError> {
		Ok(())
	}

	fn reject_first(_: &u32, _: &RouteContext<()>) -> Result<(), ApiError> {
		Err(ApiError::bad_request("first"))
	}

	fn reject_second(_: &u32, _: &RouteContext<()>) -> Result<(), ApiError> {
		Err(ApiError::bad_request("second"))
	}

	#[test]
	fn test_all_passing() {
		let checks: &[Check<u32, ()>] = &[pass, pass];
		assert!(run(&0, &RouteContext::for_create(), checks).is_ok());
	}

	#[test]
	fn test_first_failure_wins() {
		let checks: &[Check<u32, ()>] = &[pass, reject_first, reject_second];
		let err = run(&0, &RouteContext::for_create(), checks).unwrap_err();
		assert_eq!(err, ApiError::bad_request("first"));
	}

	#[test]
	fn test_empty_pipeline_passes() {
		assert!(run(&0, &RouteContext::<()>::for_create(), &[]).is_ok());
	}
}
