pub mod hipchat;
pub mod model;
#[cfg(test)]
pub mod stub_server;
