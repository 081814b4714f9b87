// Domain model for combinatorial template expansion

pub mod template;
