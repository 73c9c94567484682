mod exact;
mod validation;
