pub mod half_period;

#[cfg(test)]
mod test;
