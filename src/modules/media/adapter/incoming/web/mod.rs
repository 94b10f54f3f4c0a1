mod request_context;

pub use request_context::url_resolver_for;
