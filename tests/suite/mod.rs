mod properties;
mod scenario;
mod shared;
