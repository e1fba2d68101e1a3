mod test_product;
