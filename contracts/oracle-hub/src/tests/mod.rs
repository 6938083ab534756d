
mod add_oracle_bulk;
mod get_tokens_in_usd;
