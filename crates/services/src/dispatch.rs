//! Request dispatch with a validation pipeline in front of every handler.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::try_join_all;
use streetcode_core::error::CoreError;
use streetcode_core::validation::Violations;

use crate::context::AppContext;
use crate::error::ServiceResult;
use crate::requests::news::{CreateNews, UpdateNews};
use crate::requests::streetcode::{CreateStreetcode, UpdateStreetcode};
use crate::validators::news::{CreateNewsValidator, UpdateNewsValidator};
use crate::validators::streetcode::{CreateStreetcodeValidator, UpdateStreetcodeValidator};

/// A command or query with exactly one handler.
#[async_trait]
pub trait Request: Send + Sync + Sized + 'static {
    type Response: Send;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<Self::Response>;
}

/// A set of rules checked before a request reaches its handler.
///
/// Returning violations is the normal failure path; `Err` is reserved for
/// repository errors hit while checking.
#[async_trait]
pub trait Validator<R>: Send + Sync {
    async fn validate(&self, request: &R, ctx: &AppContext) -> ServiceResult<Violations>;
}

type ValidatorList<R> = Vec<Arc<dyn Validator<R>>>;

/// Routes requests to their handlers after running registered validators.
pub struct Dispatcher {
    ctx: AppContext,
    /// `TypeId` of the request type to a boxed `ValidatorList<R>`.
    validators: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl Dispatcher {
    /// Build a dispatcher with every validator the service defines.
    pub fn new(ctx: AppContext) -> Self {
        let mut dispatcher = Self::without_validators(ctx);
        dispatcher.register::<CreateStreetcode>(CreateStreetcodeValidator);
        dispatcher.register::<UpdateStreetcode>(UpdateStreetcodeValidator);
        dispatcher.register::<CreateNews>(CreateNewsValidator);
        dispatcher.register::<UpdateNews>(UpdateNewsValidator);
        dispatcher
    }

    pub fn without_validators(ctx: AppContext) -> Self {
        Self {
            ctx,
            validators: HashMap::new(),
        }
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    /// Add a validator for requests of type `R`. Validators run in
    /// registration order and all of them run on every send.
    pub fn register<R: Request>(&mut self, validator: impl Validator<R> + 'static) {
        let entry = self
            .validators
            .entry(TypeId::of::<R>())
            .or_insert_with(|| Box::new(ValidatorList::<R>::new()) as Box<dyn Any + Send + Sync>);
        if let Some(list) = entry.downcast_mut::<ValidatorList<R>>() {
            list.push(Arc::new(validator));
        }
    }

    fn validators_for<R: Request>(&self) -> &[Arc<dyn Validator<R>>] {
        self.validators
            .get(&TypeId::of::<R>())
            .and_then(|boxed| boxed.downcast_ref::<ValidatorList<R>>())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Validate `request` and, if no rule failed, run its handler.
    pub async fn send<R: Request>(&self, request: R) -> ServiceResult<R::Response> {
        let validators = self.validators_for::<R>();

        if !validators.is_empty() {
            let results =
                try_join_all(validators.iter().map(|v| v.validate(&request, &self.ctx))).await?;

            let mut violations = Violations::new();
            for found in results {
                violations.extend(found);
            }

            if !violations.is_empty() {
                tracing::info!(
                    request = std::any::type_name::<R>(),
                    violations = violations.len(),
                    "Request rejected by validation",
                );
                return Err(CoreError::InvalidFields(violations.into_vec()).into());
            }
        }

        request.handle(&self.ctx).await
    }
}
