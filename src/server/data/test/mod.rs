mod member;
mod order;
