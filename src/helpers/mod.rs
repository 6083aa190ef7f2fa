pub mod mesh;
#[cfg(test)]
pub mod tasks;
