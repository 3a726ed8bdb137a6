//! AWS SSM parameter store implementation
//!
//! Drives the async SDK client from a single-threaded tokio runtime so the
//! rest of the tool stays sequential.

use crate::domain::Parameter;
use crate::error::StoreError;
use crate::store::traits::{PageRequest, ParameterPage, ParameterStore};

use aws_config::BehaviorVersion;
use aws_sdk_ssm::config::Region;
use aws_sdk_ssm::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_ssm::types::Parameter as SdkParameter;
use aws_sdk_ssm::Client;
use tokio::runtime::{Builder, Runtime};

/// SSM-backed parameter store
pub struct SsmStore {
    runtime: Runtime,
    client: Client,
}

impl SsmStore {
    /// Create a client for the given region using ambient credentials
    pub fn connect(region: &str) -> Result<Self, StoreError> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| StoreError::InitializationFailed(e.to_string()))?;

        let sdk_config = runtime.block_on(
            aws_config::defaults(BehaviorVersion::latest())
                .region(Region::new(region.to_string()))
                .load(),
        );
        log::debug!("SSM client configured for region {}", region);

        Ok(Self {
            runtime,
            client: Client::new(&sdk_config),
        })
    }
}

impl ParameterStore for SsmStore {
    fn parameters_by_path(&self, request: &PageRequest<'_>) -> Result<ParameterPage, StoreError> {
        let output = self
            .runtime
            .block_on(
                self.client
                    .get_parameters_by_path()
                    .path(request.path)
                    .with_decryption(request.with_decryption)
                    .max_results(request.max_results)
                    .set_next_token(request.next_token.map(str::to_string))
                    .send(),
            )
            .map_err(|e| classify(request.path, e))?;

        let parameters = output
            .parameters()
            .iter()
            .map(convert)
            .collect::<Result<Vec<_>, _>>()?;

        // An empty token is as good as none
        let next_token = output
            .next_token()
            .filter(|token| !token.is_empty())
            .map(str::to_string);

        Ok(ParameterPage {
            parameters,
            next_token,
        })
    }

    fn parameter(&self, name: &str, with_decryption: bool) -> Result<Parameter, StoreError> {
        let output = self
            .runtime
            .block_on(
                self.client
                    .get_parameter()
                    .name(name)
                    .with_decryption(with_decryption)
                    .send(),
            )
            .map_err(|e| classify(name, e))?;

        output
            .parameter()
            .ok_or_else(|| StoreError::ParameterNotFound(name.to_string()))
            .and_then(convert)
    }
}

fn convert(parameter: &SdkParameter) -> Result<Parameter, StoreError> {
    let name = parameter
        .name()
        .ok_or(StoreError::MalformedResponse("name"))?;
    let value = parameter
        .value()
        .ok_or(StoreError::MalformedResponse("value"))?;
    Ok(Parameter::new(name, value))
}

/// Map an SDK failure onto a [`StoreError`]
fn classify<E, R>(target: &str, err: SdkError<E, R>) -> StoreError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug,
{
    let detail = DisplayErrorContext(&err).to_string();

    match &err {
        SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) => StoreError::Unreachable(detail),
        SdkError::ConstructionFailure(_) => StoreError::Request(detail),
        SdkError::ServiceError(service) => {
            let service_err = service.err();
            classify_code(service_err.code(), service_err.message(), target, detail)
        }
        _ => StoreError::Unknown(detail),
    }
}

/// Map a service error code onto a [`StoreError`]
fn classify_code(
    code: Option<&str>,
    message: Option<&str>,
    target: &str,
    detail: String,
) -> StoreError {
    match code {
        Some("ParameterNotFound") => StoreError::ParameterNotFound(target.to_string()),
        Some(
            "AccessDeniedException"
            | "UnrecognizedClientException"
            | "ExpiredTokenException"
            | "InvalidSignatureException"
            | "InvalidClientTokenId",
        ) => StoreError::AccessDenied(detail),
        Some("ThrottlingException" | "TooManyUpdates") => StoreError::Throttled(detail),
        Some(code) => StoreError::Service {
            code: code.to_string(),
            message: message.unwrap_or_default().to_string(),
        },
        None => StoreError::Unknown(detail),
    }
}
