mod watch_flow_tests;
