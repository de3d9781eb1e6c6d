mod role_channel;
