mod listing_form_tests;
