#![allow(missing_docs)]

pub(crate) mod http;
pub(crate) mod store;

pub(crate) use http::{
    create_transaction, get_logged_test_server, get_test_server, get_test_server_with_store,
};
pub(crate) use store::SpyTransactionStore;
