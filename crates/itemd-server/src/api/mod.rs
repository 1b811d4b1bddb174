// ABOUTME: API module containing all HTTP handler functions for the itemd REST API.
// ABOUTME: One sub-module for the item CRUD handlers.

pub mod items;
