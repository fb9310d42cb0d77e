mod describe_tests;
