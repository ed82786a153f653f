pub mod default_api;
pub mod facade;

pub use crate::domain::http::{HttpInfo, RequestContext, ResponseContext};
pub use crate::domain::ports::{
    DefaultApi, HttpLibrary, Middleware, RequestFactory, ResponseProcessor, SecurityAuthentication,
};
pub use crate::utils::error::Result;
