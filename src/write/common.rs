/// apply the input fields shared by put, update and delete to a builder
#[macro_export]
macro_rules! apply_write_input {
    ($builder:expr, $input:expr) => {
        $builder
            .set_condition_expression($input.condition_expression)
            .set_conditional_operator($input.conditional_operator)
            .set_expected($input.expected)
            .set_expression_attribute_names($input.expression_attribute_names)
            .set_expression_attribute_values($input.expression_attribute_values)
            .set_return_consumed_capacity($input.return_consumed_capacity)
            .set_return_item_collection_metrics($input.return_item_collection_metrics)
            .set_return_values($input.return_values)
            .set_return_values_on_condition_check_failure(
                $input.return_values_on_condition_check_failure,
            )
            .set_table_name($input.table_name)
    };
}
