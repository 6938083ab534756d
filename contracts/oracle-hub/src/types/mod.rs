pub mod price_resolver;
