
mod test_moves;
