/// apply every get item input field to a builder
#[macro_export]
macro_rules! apply_get_item_input {
    ($builder:expr, $input:expr) => {
        $builder
            .set_attributes_to_get($input.attributes_to_get)
            .set_consistent_read($input.consistent_read)
            .set_expression_attribute_names($input.expression_attribute_names)
            .set_key($input.key)
            .set_projection_expression($input.projection_expression)
            .set_return_consumed_capacity($input.return_consumed_capacity)
            .set_table_name($input.table_name)
    };
}

/// apply the input fields shared by query and scan to a builder
#[macro_export]
macro_rules! apply_multiple_read_input {
    ($builder:expr, $input:expr) => {
        $builder
            .set_attributes_to_get($input.attributes_to_get)
            .set_conditional_operator($input.conditional_operator)
            .set_consistent_read($input.consistent_read)
            .set_exclusive_start_key($input.exclusive_start_key)
            .set_expression_attribute_names($input.expression_attribute_names)
            .set_expression_attribute_values($input.expression_attribute_values)
            .set_filter_expression($input.filter_expression)
            .set_index_name($input.index_name)
            .set_limit($input.limit)
            .set_projection_expression($input.projection_expression)
            .set_return_consumed_capacity($input.return_consumed_capacity)
            .set_select($input.select)
            .set_table_name($input.table_name)
    };
}

/// follow the cursor chain of a query or scan and collect every page's items
///
/// The first request starts from no cursor. Any page error is returned through `?`,
/// dropping what was collected so far.
#[macro_export]
macro_rules! fetch_all_pages {
    ($client:expr, $operation:ident, $input:expr) => {{
        let mut input = $input;
        let mut items: Vec<$crate::common::Item> = Vec::new();
        let mut cursor: Option<$crate::common::Cursor> = None;
        loop {
            input.exclusive_start_key = cursor;
            let output = $client.$operation(input.clone()).await?;
            items.extend(output.items.unwrap_or_default());
            match output.last_evaluated_key {
                Some(last_evaluated_key) => cursor = Some(last_evaluated_key),
                None => break,
            }
        }
        Ok(items)
    }};
}
