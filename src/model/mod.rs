/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// Authentication models and session state
pub mod auth;
/// HTTP transport with token injection and error mapping
pub mod http;
/// Request models for API calls
pub mod requests;
/// Response envelopes from API calls
pub mod responses;
