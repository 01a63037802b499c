mod closed_form_tests;
mod property_tests;
