//! Shared helpers for lifecycle operations (dispatch, status mapping, outcome recording).

// self
use crate::{
	_prelude::*,
	http::{TokenHttpClient, TokenHttpRequest, TokenHttpResponse},
	obs::{self, OperationKind, OperationOutcome},
};

/// Sends `request` and converts any non-200 answer into [`Error::Rejected`].
pub(crate) async fn post_form<C>(client: &C, request: TokenHttpRequest) -> Result<TokenHttpResponse>
where
	C: ?Sized + TokenHttpClient,
{
	let response = client.execute(request).await?;

	ensure_ok(response)
}

/// Passes HTTP 200 through and maps every other status to [`Error::Rejected`].
pub fn ensure_ok(response: TokenHttpResponse) -> Result<TokenHttpResponse> {
	if response.is_ok() {
		Ok(response)
	} else {
		Err(Error::Rejected { status: response.status, reason: response.reason, body: response.body })
	}
}

/// Records metrics and the summary event for a finished operation.
pub(crate) fn finish<T>(kind: OperationKind, result: &Result<T>) {
	let outcome =
		if result.is_ok() { OperationOutcome::Success } else { OperationOutcome::Failure };

	obs::record_operation_outcome(kind, outcome);
	obs::trace_operation_result(kind, result);
}
