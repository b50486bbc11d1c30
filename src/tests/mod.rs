mod config;
mod exe;
mod stack;
mod validator;
