
#[cfg(test)]
mod callback_routing_tests;

#[cfg(test)]
mod written_representations_tests;


#[cfg(test)]
mod parent_case_update_tests;
