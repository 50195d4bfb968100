pub mod conditions;
pub mod v1alpha1;

#[cfg(test)]
mod tests;
